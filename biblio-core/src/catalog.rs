//! Server-side library records and loan rules
//!
//! The front end never enforces these rules itself; `Catalog` backs the
//! reference collaborator and the in-memory API used in tests. A book is
//! unavailable exactly when one member holds it.

use crate::error::CatalogError;
use crate::types::{Book, BookId, LoanRequest, NewBook, NewUser, User, UserId};
use serde::{Deserialize, Serialize};

/// Persisted member record; loans are stored as book ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct Member {
    id: UserId,
    name: String,
    loans: Vec<BookId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books in registration order
    pub fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Users with their loans expanded to full books
    pub fn users(&self) -> Vec<User> {
        self.members
            .iter()
            .map(|member| User {
                id: member.id.clone(),
                name: member.name.clone(),
                books: member
                    .loans
                    .iter()
                    .filter_map(|id| self.book(id).cloned())
                    .collect(),
            })
            .collect()
    }

    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    pub fn add_book(&mut self, new: NewBook) -> Result<Book, CatalogError> {
        if new.title.trim().is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        if new.author.trim().is_empty() {
            return Err(CatalogError::MissingField("author"));
        }

        let book = Book::from_new(BookId::generate(), new);
        self.books.push(book.clone());
        Ok(book)
    }

    pub fn add_user(&mut self, new: NewUser) -> Result<User, CatalogError> {
        if new.name.trim().is_empty() {
            return Err(CatalogError::MissingField("name"));
        }

        let member = Member {
            id: UserId::generate(),
            name: new.name,
            loans: Vec::new(),
        };
        let user = User::new(member.id.clone(), member.name.clone());
        self.members.push(member);
        Ok(user)
    }

    pub fn borrow(&mut self, request: &LoanRequest) -> Result<(), CatalogError> {
        let member_idx = self.member_index(&request.user_id)?;
        let book_idx = self.book_index(&request.book_id)?;

        if !self.books[book_idx].is_available {
            return Err(CatalogError::BookUnavailable(request.book_id.to_string()));
        }

        self.books[book_idx].is_available = false;
        self.members[member_idx].loans.push(request.book_id.clone());
        Ok(())
    }

    pub fn return_book(&mut self, request: &LoanRequest) -> Result<(), CatalogError> {
        let member_idx = self.member_index(&request.user_id)?;
        let book_idx = self.book_index(&request.book_id)?;

        let loans = &mut self.members[member_idx].loans;
        let Some(pos) = loans.iter().position(|id| id == &request.book_id) else {
            return Err(CatalogError::NotBorrowed {
                user: request.user_id.to_string(),
                book: request.book_id.to_string(),
            });
        };

        loans.remove(pos);
        self.books[book_idx].is_available = true;
        Ok(())
    }

    fn member_index(&self, id: &UserId) -> Result<usize, CatalogError> {
        self.members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| CatalogError::UnknownUser(id.to_string()))
    }

    fn book_index(&self, id: &BookId) -> Result<usize, CatalogError> {
        self.books
            .iter()
            .position(|b| &b.id == id)
            .ok_or_else(|| CatalogError::UnknownBook(id.to_string()))
    }
}
