use agdb::{DbElement, DbId};

#[derive(Debug, Clone, DbElement, PartialEq, PartialOrd)]
pub(crate) struct QuizModel {
    db_id: Option<DbId>,
    uid: u64,
    /// Position of the quiz in the displayed sequence
    number: u64,
    name: String,
    category: String,
}

impl QuizModel {
    pub fn new(uid: u64, number: u64, name: &str, category: &str) -> Self {
        Self {
            db_id: None,
            uid,
            number,
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}
