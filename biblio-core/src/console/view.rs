//! Table rows derived from console state

use crate::types::{Book, BookId, User, UserId};
use serde::Serialize;

/// Which table is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Books,
    Users,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Books => "Lista de Libros",
            Self::Users => "Lista de Usuarios",
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "books" => Ok(Self::Books),
            "users" => Ok(Self::Users),
            other => Err(format!("unknown tab '{}' (expected books or users)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub status: &'static str,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.publication_year,
            isbn: book.isbn.clone(),
            status: book.status_label(),
        }
    }
}

/// A borrowed book offered for return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanRow {
    pub book_id: BookId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub borrowed: usize,
    pub loans: Vec<LoanRow>,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            borrowed: user.books.len(),
            loans: user
                .books
                .iter()
                .map(|b| LoanRow {
                    book_id: b.id.clone(),
                    title: b.title.clone(),
                })
                .collect(),
        }
    }
}
