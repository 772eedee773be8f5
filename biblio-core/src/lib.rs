//! Biblio Core Library
//!
//! This crate provides the types and presentation logic for the Biblio library
//! administration front end. All persistence lives in a remote REST
//! collaborator reached through [`api::LibraryApi`]; the [`console::Console`]
//! holds what a librarian sees and does between requests.

pub mod api;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod filter;
pub mod form;
pub mod notify;
pub mod types;

pub use api::{HttpLibraryApi, LibraryApi, MemoryLibraryApi};
pub use catalog::Catalog;
pub use config::ClientConfig;
pub use console::{Console, Tab};
pub use error::{ApiError, BiblioError, CatalogError, FormError, Result};
pub use filter::{AvailabilityFilter, LoanFilter};
pub use form::{BookForm, Field, UserForm};
pub use notify::{Level, Notification, Notifications};
pub use types::{Book, BookId, LoanRequest, NewBook, NewUser, User, UserId};
