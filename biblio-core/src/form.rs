//! Registration form state
//!
//! Fields hold raw text exactly as typed. Every field is required; a form
//! only becomes a request payload through `validate`.

use crate::error::FormError;
use crate::types::{NewBook, NewUser};
use std::str::FromStr;

/// Editable fields across both registration forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    PublicationYear,
    Isbn,
    Name,
}

impl Field {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Título",
            Self::Author => "Autor",
            Self::PublicationYear => "Año",
            Self::Isbn => "ISBN",
            Self::Name => "Nombre",
        }
    }

    pub fn is_book_field(self) -> bool {
        !matches!(self, Self::Name)
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" | "publicationyear" => Ok(Self::PublicationYear),
            "isbn" => Ok(Self::Isbn),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown form field '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publication_year: String,
    pub isbn: String,
}

impl BookForm {
    /// Set a book field; user fields are ignored
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::PublicationYear => self.publication_year = value,
            Field::Isbn => self.isbn = value,
            Field::Name => {}
        }
    }

    pub fn validate(&self) -> Result<NewBook, FormError> {
        let title = required(&self.title, Field::Title)?;
        let author = required(&self.author, Field::Author)?;
        let year = required(&self.publication_year, Field::PublicationYear)?;
        let isbn = required(&self.isbn, Field::Isbn)?;

        let publication_year = year
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear(year.clone()))?;

        Ok(NewBook {
            title,
            author,
            publication_year,
            isbn,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
}

impl UserForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if field == Field::Name {
            self.name = value.into();
        }
    }

    pub fn validate(&self) -> Result<NewUser, FormError> {
        Ok(NewUser {
            name: required(&self.name, Field::Name)?,
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
    }
}

fn required(value: &str, field: Field) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field.label()))
    } else {
        Ok(trimmed.to_string())
    }
}
