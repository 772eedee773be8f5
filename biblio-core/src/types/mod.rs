//! Entity types as exchanged with the REST collaborator

mod book;
mod id;
mod loan;
mod user;

pub use book::{Book, NewBook};
pub use id::{BookId, UserId};
pub use loan::LoanRequest;
pub use user::{NewUser, User};
