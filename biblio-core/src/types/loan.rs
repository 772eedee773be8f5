//! Borrow/return payload

use super::{BookId, UserId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Users/borrow` and `POST /api/Users/return`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub user_id: UserId,
    pub book_id: BookId,
}

impl LoanRequest {
    pub fn new(user_id: impl Into<UserId>, book_id: impl Into<BookId>) -> Self {
        Self {
            user_id: user_id.into(),
            book_id: book_id.into(),
        }
    }
}
