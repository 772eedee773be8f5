//! Client-side table filters

use crate::types::{Book, User};
use std::fmt;
use std::str::FromStr;

/// Tri-state availability filter for the catalog table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    /// Every book
    #[default]
    All,

    /// Only books that can be lent
    Available,

    /// Only books currently on loan
    Unavailable,
}

impl AvailabilityFilter {
    pub fn matches(self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Available => book.is_available,
            Self::Unavailable => !book.is_available,
        }
    }

    /// The flag this filter compares `isAvailable` against, `None` meaning all
    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Available => Some(true),
            Self::Unavailable => Some(false),
        }
    }

    pub fn apply<'a>(self, books: &'a [Book]) -> impl Iterator<Item = &'a Book> + 'a {
        books.iter().filter(move |b| self.matches(b))
    }
}

impl From<Option<bool>> for AvailabilityFilter {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => Self::All,
            Some(true) => Self::Available,
            Some(false) => Self::Unavailable,
        }
    }
}

impl FromStr for AvailabilityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(format!(
                "'{}' is not a valid availability filter (expected available, unavailable or all)",
                other
            )),
        }
    }
}

impl fmt::Display for AvailabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        })
    }
}

/// Filter for the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanFilter {
    #[default]
    All,

    /// Users holding at least one book
    WithLoans,
}

impl LoanFilter {
    pub fn matches(self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::WithLoans => user.has_loans(),
        }
    }

    pub fn apply<'a>(self, users: &'a [User]) -> impl Iterator<Item = &'a User> + 'a {
        users.iter().filter(move |u| self.matches(u))
    }
}

impl From<bool> for LoanFilter {
    fn from(with_loans: bool) -> Self {
        if with_loans {
            Self::WithLoans
        } else {
            Self::All
        }
    }
}

impl FromStr for LoanFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "with" | "with-loans" => Ok(Self::WithLoans),
            other => Err(format!(
                "'{}' is not a valid loan filter (expected with or all)",
                other
            )),
        }
    }
}
