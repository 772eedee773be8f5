//! Access to the REST collaborator
//!
//! The collaborator is the system of record for books and users. The
//! console only talks to it through [`LibraryApi`].

mod http;
mod memory;

pub use http::HttpLibraryApi;
pub use memory::{MemoryLibraryApi, RecordedRequest};

use crate::error::ApiError;
use crate::types::{Book, LoanRequest, NewBook, NewUser, User};
use async_trait::async_trait;

/// Result type for collaborator calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Endpoint paths relative to the configured base URL
pub mod endpoints {
    pub const BOOKS: &str = "/api/Books";
    pub const USERS: &str = "/api/Users";
    pub const BORROW: &str = "/api/Users/borrow";
    pub const RETURN: &str = "/api/Users/return";
}

/// Abstract REST collaborator
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// `GET /api/Books`
    async fn list_books(&self) -> ApiResult<Vec<Book>>;

    /// `POST /api/Books`
    async fn create_book(&self, book: &NewBook) -> ApiResult<()>;

    /// `GET /api/Users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// `POST /api/Users`
    async fn create_user(&self, user: &NewUser) -> ApiResult<()>;

    /// `POST /api/Users/borrow`
    async fn borrow(&self, request: &LoanRequest) -> ApiResult<()>;

    /// `POST /api/Users/return`
    async fn return_book(&self, request: &LoanRequest) -> ApiResult<()>;
}

#[async_trait]
impl<T: LibraryApi + ?Sized> LibraryApi for std::sync::Arc<T> {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        (**self).list_books().await
    }

    async fn create_book(&self, book: &NewBook) -> ApiResult<()> {
        (**self).create_book(book).await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        (**self).list_users().await
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
        (**self).create_user(user).await
    }

    async fn borrow(&self, request: &LoanRequest) -> ApiResult<()> {
        (**self).borrow(request).await
    }

    async fn return_book(&self, request: &LoanRequest) -> ApiResult<()> {
        (**self).return_book(request).await
    }
}
