//! Interactive shell: the tabbed console driven one line at a time

use crate::render;
use anyhow::Result;
use biblio_core::{AvailabilityFilter, BookId, Console, Field, LibraryApi, LoanFilter, Tab, UserId};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Comandos:
  tab books|users                  cambiar de pestaña
  filter available|unavailable|all filtrar libros
  loans with|all                   filtrar usuarios
  open | close                     abrir o cerrar el registro
  set <campo> <valor>              campos: title, author, year, isbn, name
  submit book|user                 enviar un formulario
  select <usuario> [<libro>]       elegir el libro a prestar
  borrow <usuario>                 prestar el libro elegido
  return <usuario> <libro>         devolver un libro
  refresh                          volver a cargar libros y usuarios
  help | quit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Book,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Tab(Tab),
    Filter(AvailabilityFilter),
    Loans(LoanFilter),
    Open,
    Close,
    Set(Field, String),
    Submit(FormKind),
    Select(UserId, BookId),
    Borrow(UserId),
    Return(UserId, BookId),
    Refresh,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        match (verb, args.as_slice()) {
            ("tab", [tab]) => Ok(Self::Tab(tab.parse()?)),
            ("filter", [filter]) => Ok(Self::Filter(filter.parse()?)),
            ("loans", [filter]) => Ok(Self::Loans(filter.parse()?)),
            ("open", []) => Ok(Self::Open),
            ("close", []) => Ok(Self::Close),
            ("set", [field, ..]) => {
                let field: Field = field.parse()?;
                let value = rest
                    .split_once(char::is_whitespace)
                    .map(|(_, v)| v.trim())
                    .unwrap_or("");
                Ok(Self::Set(field, value.to_string()))
            }
            ("submit", ["book"]) => Ok(Self::Submit(FormKind::Book)),
            ("submit", ["user"]) => Ok(Self::Submit(FormKind::User)),
            ("select", [user]) => Ok(Self::Select(UserId::new(*user), BookId::new(""))),
            ("select", [user, book]) => Ok(Self::Select(UserId::new(*user), BookId::new(*book))),
            ("borrow", [user]) => Ok(Self::Borrow(UserId::new(*user))),
            ("return", [user, book]) => Ok(Self::Return(UserId::new(*user), BookId::new(*book))),
            ("refresh", []) => Ok(Self::Refresh),
            ("help", []) => Ok(Self::Help),
            ("quit" | "exit", []) => Ok(Self::Quit),
            _ => Err(format!("comando no reconocido: '{}' (escribe help)", line)),
        }
    }
}

/// Run the shell until `quit` or end of input
pub async fn shell<A, R, W>(console: &mut Console<A>, input: R, mut out: W) -> Result<()>
where
    A: LibraryApi,
    R: BufRead,
    W: Write,
{
    console.mount().await;
    notify_session(console, &mut out)?;
    write!(out, "{}", render::active_tab(console))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        tracing::debug!("shell command: {:?}", command);
        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            command => execute(console, command).await,
        }

        notify_session(console, &mut out)?;
        if console.is_modal_open() {
            write!(out, "{}", render::modal(console))?;
        }
        write!(out, "{}", render::active_tab(console))?;
        out.flush()?;
    }

    Ok(())
}

async fn execute<A: LibraryApi>(console: &mut Console<A>, command: ShellCommand) {
    match command {
        ShellCommand::Tab(tab) => console.set_tab(tab),
        ShellCommand::Filter(filter) => console.set_availability_filter(filter),
        ShellCommand::Loans(filter) => console.set_loan_filter(filter),
        ShellCommand::Open => console.open_modal(),
        ShellCommand::Close => console.close_modal(),
        ShellCommand::Set(field, value) => console.set_field(field, value),
        ShellCommand::Submit(FormKind::Book) => {
            console.submit_book().await;
        }
        ShellCommand::Submit(FormKind::User) => {
            console.submit_user().await;
        }
        ShellCommand::Select(user, book) => console.select_book(user, book),
        ShellCommand::Borrow(user) => {
            console.borrow(&user).await;
        }
        ShellCommand::Return(user, book) => {
            console.return_book(&user, &book).await;
        }
        ShellCommand::Refresh => {
            console.mount().await;
        }
        ShellCommand::Help | ShellCommand::Quit => {}
    }
}

/// In the shell every notification goes to the session output
fn notify_session<A: LibraryApi>(console: &mut Console<A>, out: &mut impl Write) -> Result<()> {
    for notification in console.take_notifications() {
        let mark = if notification.is_error() { "✗" } else { "✓" };
        writeln!(out, "{} {}", mark, notification.message)?;
    }
    Ok(())
}
