//! The quiz list screen.
//!
//! [`QuizScreen`] holds the authoritative in-memory quiz list between loads
//! and derives the displayed view from it on demand: base list, then the
//! search predicate, then the active column ordering. Every mutating flow
//! writes through the repository and ends with a full reload, so the screen
//! never reconciles in-memory deltas against the store.

use tracing::error;

use crate::{
    Result,
    repository::{self, Quiz, QuizId, Repository},
};

mod ports;
mod sort;

pub use ports::{Dialogs, Navigator, QuizForm};
pub use sort::{SortColumn, SortDirection, SortState};

pub struct QuizScreen {
    repo: Repository,
    quizzes: Vec<Quiz>,
    search: String,
    sort: Option<SortState>,
}

impl QuizScreen {
    /// Open the screen over `repo`, loading the initial quiz list.
    pub fn new(repo: Repository) -> Result<Self> {
        let mut screen = Self {
            repo,
            quizzes: Vec::new(),
            search: String::new(),
            sort: None,
        };
        screen.reload()?;

        Ok(screen)
    }

    /// Replace the quiz list with a fresh snapshot from the repository.
    ///
    /// The search filter resets to pass-all. The active sort survives and is
    /// re-applied to the new list by the next [`QuizScreen::visible`] call.
    pub fn reload(&mut self) -> Result<()> {
        self.quizzes = self.repo.quizzes()?;
        self.search.clear();

        Ok(())
    }

    /// All loaded quizzes, in stored order.
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Update the live search filter.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Toggle sorting on `column`: re-selecting the active column flips the
    /// direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(state) => state.toggle(column),
            None => SortState {
                column,
                ..SortState::default()
            },
        });
    }

    /// The displayed view: quizzes matching the search filter, ordered by the
    /// active sort. Without a sort the stored order is kept.
    pub fn visible(&self) -> Vec<&Quiz> {
        let mut view: Vec<&Quiz> = self
            .quizzes
            .iter()
            .filter(|quiz| matches_search(quiz, &self.search))
            .collect();

        if let Some(sort) = self.sort {
            view.sort_by(|a, b| sort.ordering(a, b));
        }

        view
    }

    /// Collect details for a new quiz through the form dialog and persist
    /// them. Cancelling the dialog changes nothing.
    pub fn add_quiz(&mut self, dialogs: &mut dyn Dialogs) -> Result<()> {
        let Some(form) = dialogs.quiz_form(None) else {
            return Ok(());
        };

        self.repo.add_quiz(&form.name, &form.category)?;
        self.reload()
    }

    /// Edit the quiz with `id` through the form dialog, pre-filled with its
    /// current values. Cancelling the dialog changes nothing.
    pub fn edit_quiz(&mut self, dialogs: &mut dyn Dialogs, id: QuizId) -> Result<()> {
        let mut quiz = self.find(id)?.clone();

        let Some(form) = dialogs.quiz_form(Some(&quiz)) else {
            return Ok(());
        };

        quiz.set_name(form.name);
        quiz.set_category(form.category);

        self.repo.update_quiz(&quiz)?;
        self.reload()
    }

    /// Delete the quiz with `id`. Nothing reaches the repository unless the
    /// user explicitly confirms.
    pub fn delete_quiz(&mut self, dialogs: &mut dyn Dialogs, id: QuizId) -> Result<()> {
        let quiz = self.find(id)?.clone();

        if !dialogs.confirm_delete(&quiz) {
            return Ok(());
        }

        self.repo.remove_quiz(quiz.id())?;
        self.reload()
    }

    /// Hand the quiz with `id` off to the question management flow. A failed
    /// handoff is reported to the user and changes no state.
    pub fn manage_questions(
        &mut self,
        dialogs: &mut dyn Dialogs,
        navigator: &mut dyn Navigator,
        id: QuizId,
    ) -> Result<()> {
        let quiz = self.find(id)?.clone();

        if let Err(err) = navigator.open_question_manager(&quiz) {
            error!("Failed to open the question manager: {err:#}");
            dialogs.notify("Error", "Failed to open Manage Questions view.");
        }

        Ok(())
    }

    /// Leave the screen. Navigation failures propagate to the caller.
    pub fn back_to_main(&mut self, navigator: &mut dyn Navigator) -> anyhow::Result<()> {
        navigator.return_to_main()
    }

    fn find(&self, id: QuizId) -> Result<&Quiz> {
        self.quizzes
            .iter()
            .find(|quiz| quiz.id() == id)
            .ok_or_else(|| repository::Error::RemovedQuiz.into())
    }
}

/// A quiz passes an empty filter, or one whose text occurs case-insensitively
/// in its name or category.
fn matches_search(quiz: &Quiz, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    let needle = text.to_lowercase();

    quiz.name().to_lowercase().contains(&needle)
        || quiz.category().to_lowercase().contains(&needle)
}
