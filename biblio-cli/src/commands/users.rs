//! Users command implementation

use super::{report_stdio, with_spinner};
use crate::render;
use anyhow::{bail, Result};
use biblio_core::{Console, LibraryApi};

/// List users, optionally only those holding books
pub async fn users<A: LibraryApi>(console: &mut Console<A>, with_loans: bool, json: bool) -> Result<()> {
    let fetched = with_spinner("Obteniendo usuarios...", console.mount()).await?;
    report_stdio(console)?;
    if !fetched {
        bail!("Could not fetch the library");
    }

    console.set_loan_filter(with_loans);
    let rows = console.user_rows();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render::users_table(&rows));
        print!("{}", render::selector(&console.available_books()));
    }

    Ok(())
}
