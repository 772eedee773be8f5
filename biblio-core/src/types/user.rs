//! The User entity and its creation payload

use super::{Book, BookId, UserId};
use serde::{Deserialize, Serialize};

/// A library user as listed by `GET /api/Users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,

    pub name: String,

    /// Books currently on loan, in loan order
    #[serde(default)]
    pub books: Vec<Book>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn has_loans(&self) -> bool {
        !self.books.is_empty()
    }

    pub fn holds(&self, book: &BookId) -> bool {
        self.books.iter().any(|b| &b.id == book)
    }
}

/// Body of `POST /api/Users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}
