//! Collaborator interfaces the quiz screen depends on.
//!
//! Front-ends inject implementations of these instead of the screen reaching
//! for any process-wide surface, so tests can drive the screen with scripted
//! fakes.

use crate::repository::Quiz;

/// Values collected by the quiz form dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizForm {
    pub name: String,
    pub category: String,
}

/// Modal interaction surface presented to the user.
///
/// Implementations block until the user answers. Cancelling must leave every
/// collaborator untouched.
pub trait Dialogs {
    /// Present the quiz form, pre-filled from `existing` when editing.
    /// Returns `None` when the user cancels.
    fn quiz_form(&mut self, existing: Option<&Quiz>) -> Option<QuizForm>;

    /// Ask the user to confirm the deletion of `quiz`.
    fn confirm_delete(&mut self, quiz: &Quiz) -> bool;

    /// Show a generic titled notification.
    fn notify(&mut self, title: &str, message: &str);
}

/// Cross-screen navigation handled by the embedding front-end.
pub trait Navigator {
    /// Open the question management flow for `quiz`.
    fn open_question_manager(&mut self, quiz: &Quiz) -> anyhow::Result<()>;

    /// Leave the quiz screen and return to the main view.
    fn return_to_main(&mut self) -> anyhow::Result<()>;
}
