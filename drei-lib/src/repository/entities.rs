//! The quiz entity as seen by the rest of the system.
//!
//! Quizzes are snapshot values: a [`Quiz`] reflects the stored record at the
//! time it was loaded, and edits to it are only durable once written back
//! through the repository. The next load replaces every snapshot with the
//! authoritative stored state.

use std::fmt::{self, Display, Formatter};

use getset::{CopyGetters, Getters, Setters};

/// Stable identifier of a persisted quiz, assigned by the repository on
/// insert and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, derive_more::From,
)]
pub struct QuizId(pub(crate) u64);

/// A snapshot of one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Setters)]
pub struct Quiz {
    #[getset(get_copy = "pub")]
    pub(crate) id: QuizId,
    /// Position of the quiz in the displayed sequence, assigned by the
    /// repository on insert.
    #[getset(get_copy = "pub")]
    pub(crate) number: u64,
    #[getset(get = "pub", set = "pub")]
    pub(crate) name: String,
    #[getset(get = "pub", set = "pub")]
    pub(crate) category: String,
}

impl Display for Quiz {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
