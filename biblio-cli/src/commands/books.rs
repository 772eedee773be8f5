//! Books command implementation

use super::{report_stdio, with_spinner};
use crate::render;
use anyhow::{bail, Result};
use biblio_core::{AvailabilityFilter, Console, LibraryApi};

/// List the catalog under an availability filter
pub async fn books<A: LibraryApi>(
    console: &mut Console<A>,
    status: AvailabilityFilter,
    json: bool,
) -> Result<()> {
    let fetched = with_spinner("Obteniendo libros...", console.refresh_books()).await?;
    report_stdio(console)?;
    if !fetched {
        bail!("Could not fetch the book catalog");
    }

    console.set_availability_filter(status);
    let rows = console.book_rows();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render::books_table(&rows));
    }

    Ok(())
}
