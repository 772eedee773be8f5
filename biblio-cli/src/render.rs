//! Plain-text tables for the terminal

use biblio_core::console::{BookRow, UserRow};
use biblio_core::{Book, Console, LibraryApi, Tab};
use std::fmt::Write;

/// Left-aligned table with a header rule; widths count characters, not bytes
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers.to_vec()));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }
    out
}

pub fn books_table(rows: &[BookRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.title.clone(),
                r.author.clone(),
                r.year.map(|y| y.to_string()).unwrap_or_default(),
                r.isbn.clone().unwrap_or_default(),
                r.status.to_string(),
            ]
        })
        .collect();
    table(&["ID", "Título", "Autor", "Año", "ISBN", "Estado"], &cells)
}

pub fn users_table(rows: &[UserRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let loans: Vec<String> = r
                .loans
                .iter()
                .map(|l| format!("{} ({})", l.title, l.book_id))
                .collect();
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.borrowed.to_string(),
                loans.join(", "),
            ]
        })
        .collect();
    table(&["ID", "Nombre", "Libros Prestados", "Préstamos"], &cells)
}

/// Options for the per-user borrow selector
pub fn selector(available: &[&Book]) -> String {
    if available.is_empty() {
        return "Seleccionar libro: (ninguno disponible)\n".to_string();
    }
    let options: Vec<String> = available
        .iter()
        .map(|b| format!("{} ({})", b.title, b.id))
        .collect();
    format!("Seleccionar libro: {}\n", options.join(", "))
}

/// The registration modal with both forms
pub fn modal<A: LibraryApi>(console: &Console<A>) -> String {
    let book = console.book_form();
    let user = console.user_form();
    let mut out = String::new();
    let _ = writeln!(out, "== Registrar Libro ==");
    let _ = writeln!(out, "  Título: {}", book.title);
    let _ = writeln!(out, "  Autor:  {}", book.author);
    let _ = writeln!(out, "  Año:    {}", book.publication_year);
    let _ = writeln!(out, "  ISBN:   {}", book.isbn);
    let _ = writeln!(out, "== Registrar Usuario ==");
    let _ = writeln!(out, "  Nombre: {}", user.name);
    out
}

/// Heading, filter and table of the active tab
pub fn active_tab<A: LibraryApi>(console: &Console<A>) -> String {
    let tab = console.tab();
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", tab.title());

    match tab {
        Tab::Books => {
            let _ = writeln!(out, "Filtro: {}", console.availability_filter());
            out.push_str(&books_table(&console.book_rows()));
        }
        Tab::Users => {
            out.push_str(&users_table(&console.user_rows()));
            out.push_str(&selector(&console.available_books()));
            for user in console.visible_users() {
                if let Some(book) = console.selected_book(&user.id) {
                    let _ = writeln!(out, "  {} -> {}", user.name, book);
                }
            }
        }
    }
    out
}
