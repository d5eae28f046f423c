//! Core library for Drei, a small quiz management system.
//!
//! The [`Repository`] owns durable quiz storage and id assignment, and the
//! [`screen::QuizScreen`] component mediates between that store and a
//! front-end: it holds the loaded quiz list, derives the filtered and sorted
//! views for display, and runs the add/edit/delete flows through injected
//! dialog and navigation ports.

use thiserror::Error;

pub mod fs;
pub mod repository;
pub mod screen;

pub use repository::{Quiz, QuizId, Repository};
pub use screen::QuizScreen;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Repository(#[from] repository::Error),
}
