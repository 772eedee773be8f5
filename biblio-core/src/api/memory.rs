//! In-process collaborator over a [`Catalog`] (for testing)

use super::{ApiResult, LibraryApi};
use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::types::{Book, LoanRequest, NewBook, NewUser, User};
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

/// A request as received by [`MemoryLibraryApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    ListBooks,
    CreateBook(NewBook),
    ListUsers,
    CreateUser(NewUser),
    Borrow(LoanRequest),
    Return(LoanRequest),
}

/// In-memory collaborator that records every call in order
#[derive(Default)]
pub struct MemoryLibraryApi {
    catalog: RwLock<Catalog>,
    log: Mutex<Vec<RecordedRequest>>,
    failing: RwLock<bool>,
}

impl MemoryLibraryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with a 500 until switched back
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().await.clone()
    }

    pub async fn clear_requests(&self) {
        self.log.lock().await.clear();
    }

    pub async fn catalog(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    async fn record(&self, request: RecordedRequest) -> ApiResult<()> {
        self.log.lock().await.push(request);
        if *self.failing.read().await {
            return Err(ApiError::Status {
                status: 500,
                body: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

fn rejected(err: crate::error::CatalogError) -> ApiError {
    ApiError::Status {
        status: 400,
        body: err.to_string(),
    }
}

#[async_trait]
impl LibraryApi for MemoryLibraryApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        self.record(RecordedRequest::ListBooks).await?;
        Ok(self.catalog.read().await.books())
    }

    async fn create_book(&self, book: &NewBook) -> ApiResult<()> {
        self.record(RecordedRequest::CreateBook(book.clone())).await?;
        self.catalog
            .write()
            .await
            .add_book(book.clone())
            .map(|_| ())
            .map_err(rejected)
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record(RecordedRequest::ListUsers).await?;
        Ok(self.catalog.read().await.users())
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
        self.record(RecordedRequest::CreateUser(user.clone())).await?;
        self.catalog
            .write()
            .await
            .add_user(user.clone())
            .map(|_| ())
            .map_err(rejected)
    }

    async fn borrow(&self, request: &LoanRequest) -> ApiResult<()> {
        self.record(RecordedRequest::Borrow(request.clone())).await?;
        self.catalog.write().await.borrow(request).map_err(rejected)
    }

    async fn return_book(&self, request: &LoanRequest) -> ApiResult<()> {
        self.record(RecordedRequest::Return(request.clone())).await?;
        self.catalog
            .write()
            .await
            .return_book(request)
            .map_err(rejected)
    }
}
