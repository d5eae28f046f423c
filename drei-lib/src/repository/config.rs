use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::fs::config_dir;

const FILE_NAME: &str = "core.toml";

/// The core configuration, serialized to TOML in the Drei config directory.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Overrides the location of the quiz database file.
    pub database_file: Option<PathBuf>,
}

impl CoreConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let contents = toml::to_string_pretty(self).unwrap();

        // Make sure config_dir exists
        fs::create_dir_all(config_dir()).unwrap();

        fs::write(config_dir().join(FILE_NAME), contents).unwrap();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig {
            database_file: Some(PathBuf::from("/tmp/quizzes.db")),
        };

        fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();
        let loaded: CoreConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded.database_file, cfg.database_file);
    }

    #[test]
    fn test_missing_override_parses_to_default() {
        let loaded: CoreConfig = toml::from_str("").unwrap();

        assert_eq!(loaded.database_file, None);
    }
}
