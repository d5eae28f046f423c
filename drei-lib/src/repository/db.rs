use std::sync::Arc;

use agdb::{DbAny, QueryBuilder};
use derive_more::Deref;
use parking_lot::RwLock;

use crate::{fs::state_dir, repository::config::CoreConfig};

pub(crate) mod models;

#[derive(Debug, Clone, Deref)]
pub(crate) struct DbHandle {
    #[deref]
    db: Arc<RwLock<DbAny>>,
}

impl DbHandle {
    pub fn new(cfg: &CoreConfig) -> Self {
        let path = cfg
            .database_file
            .clone()
            .unwrap_or_else(|| state_dir().join("quizzes.db"));
        let path_str = path.to_str().unwrap();

        let mut db = Self {
            db: Arc::new(RwLock::new(DbAny::new_file(path_str).unwrap())),
        };

        db.init();

        db
    }

    fn init(&mut self) {
        // Insert aliases if they don't exist
        if self
            .db
            .read()
            .exec(QueryBuilder::select().aliases().query())
            .unwrap()
            .result
            == 0
        {
            self.db
                .write()
                .exec_mut(
                    QueryBuilder::insert()
                        .nodes()
                        .aliases([
                            // Root element node
                            "quizzes",
                            // State
                            "next_uid",
                        ])
                        .query(),
                )
                .unwrap();

            // Signifies what the UID should be for a newly inserted element. It gets
            // incremented with every new element.
            self.db
                .write()
                .exec_mut(
                    QueryBuilder::insert()
                        .values([[("next_uid", 0).into()]])
                        .ids("next_uid")
                        .query(),
                )
                .unwrap();
        }
    }

    /// Create a memory backed database for use in tests
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        let mut db = Self {
            db: Arc::new(RwLock::new(DbAny::new_memory("test").unwrap())),
        };

        db.init();

        db
    }
}
