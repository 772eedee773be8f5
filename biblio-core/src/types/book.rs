//! The Book entity and its creation payload

use super::BookId;
use serde::{Deserialize, Serialize};

/// A book as listed by `GET /api/Books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,

    pub title: String,

    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// False while the book is on loan to a user
    pub is_available: bool,
}

impl Book {
    /// Create an available book
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            publication_year: None,
            isbn: None,
            is_available: true,
        }
    }

    /// Build the stored book for a registration payload
    pub fn from_new(id: BookId, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            publication_year: Some(new.publication_year),
            isbn: Some(new.isbn),
            is_available: true,
        }
    }

    /// Status label shown in the catalog table
    pub fn status_label(&self) -> &'static str {
        if self.is_available {
            "Disponible"
        } else {
            "Prestado"
        }
    }
}

/// Body of `POST /api/Books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
}
