//! Borrow and return commands

use super::{report_stdio, with_spinner};
use anyhow::{bail, Result};
use biblio_core::{BookId, Console, LibraryApi, UserId};

/// Lend `book` to `user`; without a book nothing is sent
pub async fn borrow<A: LibraryApi>(console: &mut Console<A>, user: &str, book: Option<&str>) -> Result<()> {
    let user = UserId::new(user);
    if let Some(book) = book {
        console.select_book(user.clone(), BookId::new(book));
    }

    let lent = with_spinner("Prestando libro...", console.borrow(&user)).await?;
    report_stdio(console)?;
    if !lent {
        bail!("Borrow failed");
    }

    Ok(())
}

/// Take `book` back from `user`
pub async fn return_book<A: LibraryApi>(console: &mut Console<A>, user: &str, book: &str) -> Result<()> {
    let returned = with_spinner(
        "Devolviendo libro...",
        console.return_book(&UserId::new(user), &BookId::new(book)),
    )
    .await?;
    report_stdio(console)?;
    if !returned {
        bail!("Return failed");
    }

    Ok(())
}
