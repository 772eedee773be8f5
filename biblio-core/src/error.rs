//! Error types for Biblio Core

use thiserror::Error;

/// Result type alias using BiblioError
pub type Result<T> = std::result::Result<T, BiblioError>;

/// Top-level error type for all Biblio operations
#[derive(Debug, Error)]
pub enum BiblioError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors talking to the REST collaborator
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Server-side catalog rule violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book not found: {0}")]
    UnknownBook(String),

    #[error("User not found: {0}")]
    UnknownUser(String),

    #[error("Book is already on loan: {0}")]
    BookUnavailable(String),

    #[error("Book {book} is not on loan to user {user}")]
    NotBorrowed { user: String, book: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Registration form validation failures
///
/// Messages are shown to the librarian as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("El campo {0} es obligatorio")]
    MissingField(&'static str),

    #[error("Año de publicación inválido: {0}")]
    InvalidYear(String),
}
