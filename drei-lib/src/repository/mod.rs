//! Durable quiz storage.
//!
//! The [`Repository`] plays the persistence collaborator role for the quiz
//! screen: it owns the embedded database, assigns ids and sequence numbers,
//! and is the single source of truth for quizzes across loads.

use std::fmt::Debug;

use agdb::{DbId, DbValue, QueryBuilder};
use thiserror::Error;
use tracing::debug;

use crate::repository::{
    config::CoreConfig,
    db::{DbHandle, models::QuizModel},
};

mod db;

pub mod config;
pub mod entities;

pub use entities::{Quiz, QuizId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Internal database error {0}")]
    Internal(#[from] agdb::DbError),
    #[error("This QuizId refers to a quiz that has been removed")]
    RemovedQuiz,
}

/// Central access point for all persistent quiz data.
#[derive(Clone, Debug)]
pub struct Repository {
    db: DbHandle,
}

impl Repository {
    pub fn new() -> Self {
        let cfg = CoreConfig::load();

        Self {
            db: DbHandle::new(&cfg),
        }
    }

    /// Full snapshot of all stored quizzes, ascending by quiz number.
    pub fn quizzes(&self) -> Result<Vec<Quiz>> {
        let elements = self
            .db
            .read()
            .exec(
                QueryBuilder::select()
                    .elements::<QuizModel>()
                    .search()
                    .from("quizzes")
                    .where_()
                    .node()
                    .and()
                    .neighbor()
                    .query(),
            )?
            .elements;

        let mut quizzes = elements
            .iter()
            .map(|e| self.load_quiz(e.id))
            .collect::<Result<Vec<_>>>()?;

        quizzes.sort_by_key(Quiz::number);

        Ok(quizzes)
    }

    /// Insert a new quiz. The repository assigns the id and the next free
    /// sequence number; both become visible through [`Repository::quizzes`].
    pub fn add_quiz(&self, name: &str, category: &str) -> Result<Quiz> {
        let number = self
            .quizzes()?
            .iter()
            .map(Quiz::number)
            .max()
            .unwrap_or(0)
            + 1;

        let uid = self.next_uid()?;
        let model = QuizModel::new(uid, number, name, category);

        self.db.write().transaction_mut(|t| -> Result<DbId> {
            let quiz_id = t
                .exec_mut(QueryBuilder::insert().element(model).query())?
                .elements
                .first()
                .expect("A successful query should not be empty")
                .id;

            // Link the quiz to the root "quizzes" node
            t.exec_mut(
                QueryBuilder::insert()
                    .edges()
                    .from("quizzes")
                    .to(quiz_id)
                    .query(),
            )?;

            Ok(quiz_id)
        })?;

        let quiz = Quiz {
            id: QuizId(uid),
            number,
            name: name.to_string(),
            category: category.to_string(),
        };

        debug!("Created new quiz: {quiz}");

        Ok(quiz)
    }

    /// Overwrite the stored name and category of the record matching the
    /// quiz's id.
    pub fn update_quiz(&self, quiz: &Quiz) -> Result<()> {
        let db_id = self.find_db_id(quiz.id())?;

        self.set_field(db_id, "name", quiz.name().as_str())?;
        self.set_field(db_id, "category", quiz.category().as_str())?;

        debug!("Updated quiz {}: {quiz}", quiz.id());

        Ok(())
    }

    /// Remove the stored record matching `id`.
    pub fn remove_quiz(&self, id: QuizId) -> Result<()> {
        let db_id = self.find_db_id(id)?;

        self.db
            .write()
            .exec_mut(QueryBuilder::remove().ids(db_id).query())?;

        debug!("Removed quiz {id}");

        Ok(())
    }

    /// Allocate a fresh UID from the counter node.
    fn next_uid(&self) -> Result<u64> {
        self.db.write().transaction_mut(|t| -> Result<u64> {
            let uid = t
                .exec(
                    QueryBuilder::select()
                        .values("next_uid")
                        .ids("next_uid")
                        .query(),
                )?
                .elements
                .pop()
                .expect("successful queries should not be empty")
                .values
                .pop()
                .expect("successful queries should not be empty")
                .value
                .to_u64()?;

            t.exec_mut(
                QueryBuilder::insert()
                    .values([[("next_uid", uid + 1).into()]])
                    .ids("next_uid")
                    .query(),
            )?;

            Ok(uid)
        })
    }

    fn load_quiz(&self, db_id: DbId) -> Result<Quiz> {
        Ok(Quiz {
            id: QuizId(self.get_field(db_id, "uid")?),
            number: self.get_field(db_id, "number")?,
            name: self.get_field(db_id, "name")?,
            category: self.get_field(db_id, "category")?,
        })
    }

    /// Resolve the database element holding the quiz with `id`.
    fn find_db_id(&self, id: QuizId) -> Result<DbId> {
        let elements = self
            .db
            .read()
            .exec(
                QueryBuilder::select()
                    .elements::<QuizModel>()
                    .search()
                    .from("quizzes")
                    .where_()
                    .node()
                    .and()
                    .neighbor()
                    .query(),
            )?
            .elements;

        for element in &elements {
            let uid: u64 = self.get_field(element.id, "uid")?;
            if QuizId(uid) == id {
                return Ok(element.id);
            }
        }

        Err(Error::RemovedQuiz)
    }

    fn get_field<T>(&self, db_id: DbId, field: &str) -> Result<T>
    where
        T: TryFrom<DbValue>,
        T::Error: Debug,
    {
        let value = self
            .db
            .read()
            .exec(QueryBuilder::select().values(field).ids(db_id).query())?
            .elements
            .pop()
            .expect("successful queries should not be empty")
            .values
            .pop()
            .expect("successful queries should not be empty")
            .value;

        Ok(T::try_from(value).expect("conversion from a `DbValue` must succeed"))
    }

    fn set_field<T>(&self, db_id: DbId, field: &str, value: T) -> Result<()>
    where
        T: Into<DbValue>,
    {
        self.db.write().exec_mut(
            QueryBuilder::insert()
                .values([[(field, value).into()]])
                .ids(db_id)
                .query(),
        )?;

        Ok(())
    }

    /// Return a mock version of a [`Repository`] with an in-memory database.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            db: DbHandle::in_memory(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add() {
        let repo = Repository::in_memory();

        let quiz = repo.add_quiz("European Capitals", "Geography").unwrap();
        repo.add_quiz("Linear Algebra", "Math").unwrap();

        let quizzes = repo.quizzes().unwrap();

        assert_eq!(quizzes.len(), 2);
        assert_eq!(quiz.number(), 1);
        assert_eq!(quizzes.first().unwrap().name(), "European Capitals");
        assert_eq!(quizzes.last().unwrap().number(), 2);
        assert_eq!(quizzes.last().unwrap().category(), "Math");
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let repo = Repository::in_memory();

        repo.add_quiz("A", "X").unwrap();
        repo.add_quiz("A", "X").unwrap();
        repo.add_quiz("A", "X").unwrap();

        let quizzes = repo.quizzes().unwrap();
        let ids: std::collections::HashSet<_> = quizzes.iter().map(|q| q.id()).collect();

        assert_eq!(ids.len(), quizzes.len());
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let repo = Repository::in_memory();

        let quiz = repo.add_quiz("", "").unwrap();

        let stored = repo.quizzes().unwrap().pop().unwrap();
        assert_eq!(stored.id(), quiz.id());
        assert_eq!(stored.name(), "");
        assert_eq!(stored.category(), "");
    }

    #[test]
    fn test_update() {
        let repo = Repository::in_memory();

        let target = repo.add_quiz("European Capitals", "Geography").unwrap();
        let other = repo.add_quiz("Linear Algebra", "Math").unwrap();

        let mut edited = target.clone();
        edited.set_name("World Capitals".to_string());
        edited.set_category("Trivia".to_string());
        repo.update_quiz(&edited).unwrap();

        let quizzes = repo.quizzes().unwrap();
        let stored = quizzes.iter().find(|q| q.id() == target.id()).unwrap();

        assert_eq!(stored.name(), "World Capitals");
        assert_eq!(stored.category(), "Trivia");
        assert_eq!(
            quizzes.iter().find(|q| q.id() == other.id()).unwrap(),
            &other
        );
    }

    #[test]
    fn test_update_removed_quiz() {
        let repo = Repository::in_memory();

        let quiz = repo.add_quiz("European Capitals", "Geography").unwrap();
        repo.remove_quiz(quiz.id()).unwrap();

        assert!(matches!(
            repo.update_quiz(&quiz),
            Err(Error::RemovedQuiz)
        ));
    }

    #[test]
    fn test_remove() {
        let repo = Repository::in_memory();

        let quiz = repo.add_quiz("European Capitals", "Geography").unwrap();
        repo.add_quiz("Linear Algebra", "Math").unwrap();

        repo.remove_quiz(quiz.id()).unwrap();

        let quizzes = repo.quizzes().unwrap();
        assert_eq!(quizzes.len(), 1);
        assert!(quizzes.iter().all(|q| q.id() != quiz.id()));
    }

    #[test]
    fn test_remove_unknown_id() {
        let repo = Repository::in_memory();

        assert!(matches!(
            repo.remove_quiz(QuizId(42)),
            Err(Error::RemovedQuiz)
        ));
    }

    #[test]
    fn test_numbers_are_not_compacted() {
        let repo = Repository::in_memory();

        let first = repo.add_quiz("A", "X").unwrap();
        repo.add_quiz("B", "X").unwrap();
        repo.remove_quiz(first.id()).unwrap();

        let third = repo.add_quiz("C", "X").unwrap();

        assert_eq!(third.number(), 3);
    }
}
