//! Registration commands: the modal forms filled from arguments

use super::{report_stdio, with_spinner};
use anyhow::{bail, Result};
use biblio_core::{Console, Field, LibraryApi};

/// Register a new book
pub async fn add_book<A: LibraryApi>(
    console: &mut Console<A>,
    title: &str,
    author: &str,
    year: &str,
    isbn: &str,
) -> Result<()> {
    console.open_modal();
    console.set_field(Field::Title, title);
    console.set_field(Field::Author, author);
    console.set_field(Field::PublicationYear, year);
    console.set_field(Field::Isbn, isbn);

    let registered = with_spinner("Registrando libro...", console.submit_book()).await?;
    report_stdio(console)?;
    if !registered {
        bail!("Book '{}' was not registered", title);
    }

    tracing::debug!("Catalog now has {} books", console.books().len());
    Ok(())
}

/// Register a new user
pub async fn add_user<A: LibraryApi>(console: &mut Console<A>, name: &str) -> Result<()> {
    console.open_modal();
    console.set_field(Field::Name, name);

    let registered = with_spinner("Registrando usuario...", console.submit_user()).await?;
    report_stdio(console)?;
    if !registered {
        bail!("User '{}' was not registered", name);
    }

    Ok(())
}
