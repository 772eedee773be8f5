//! CLI command implementations

mod books;
mod loans;
mod register;
mod shell;
mod users;

pub use books::books;
pub use loans::{borrow, return_book};
pub use register::{add_book, add_user};
pub use shell::shell;
pub use users::users;

use anyhow::{Context, Result};
use biblio_core::{ClientConfig, Console, HttpLibraryApi, LibraryApi, Level, Notifications};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::Write;
use std::time::Duration;

/// Build a console talking to the configured collaborator
pub fn connect(config: &ClientConfig) -> Result<Console<HttpLibraryApi>> {
    let api = HttpLibraryApi::new(&config.api)
        .with_context(|| format!("Cannot use library API at {}", config.api.base_url))?;
    Ok(Console::with_notifications(
        api,
        Notifications::with_ttl(config.notification_ttl()),
    ))
}

/// Run a collaborator call behind a spinner
async fn with_spinner<F: Future>(message: &'static str, fut: F) -> Result<F::Output> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);

    let output = fut.await;

    pb.finish_and_clear();
    Ok(output)
}

/// Print pending notifications: successes to `out`, errors to `err`
fn report<A: LibraryApi>(
    console: &mut Console<A>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    for notification in console.take_notifications() {
        match notification.level {
            Level::Success => writeln!(out, "✓ {}", notification.message)?,
            Level::Error => writeln!(err, "✗ {}", notification.message)?,
        }
    }
    Ok(())
}

/// Report to the terminal
fn report_stdio<A: LibraryApi>(console: &mut Console<A>) -> Result<()> {
    report(console, &mut std::io::stdout(), &mut std::io::stderr())
}
