//! Biblio CLI - command-line front end for the library administration API

mod commands;
mod render;

use anyhow::{Context, Result};
use biblio_core::{AvailabilityFilter, ClientConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the library API (overrides the config file)
    #[arg(long, global = true, env = "BIBLIO_API_URL")]
    api_url: Option<String>,

    /// Configuration file (defaults to ./biblio.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the book catalog
    Books {
        /// Availability filter (available, unavailable, all)
        #[arg(short, long, default_value = "all")]
        status: AvailabilityFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users and their loans
    Users {
        /// Only users with at least one borrowed book
        #[arg(long)]
        with_loans: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new book
    AddBook {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long)]
        year: String,

        #[arg(long)]
        isbn: String,
    },

    /// Register a new user
    AddUser {
        #[arg(long)]
        name: String,
    },

    /// Lend a book to a user
    Borrow {
        /// User id
        #[arg(long)]
        user: String,

        /// Book id to lend
        #[arg(long)]
        book: Option<String>,
    },

    /// Take a borrowed book back
    Return {
        /// User id
        #[arg(long)]
        user: String,

        /// Book id to return
        #[arg(long)]
        book: String,
    },

    /// Interactive session with tabs, filters and the registration modal
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap sees its variables
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = cli.api_url.clone() {
        config = config.with_base_url(url);
    }

    // Initialize tracing
    let filter = if cli.verbose {
        "biblio_cli=debug,biblio_core=debug".to_string()
    } else {
        config
            .logging
            .level
            .clone()
            .unwrap_or_else(|| "biblio_cli=info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut console = commands::connect(&config)?;
    tracing::debug!("Using library API at {}", console.api().base_url());

    match cli.command {
        Commands::Books { status, json } => commands::books(&mut console, status, json).await,

        Commands::Users { with_loans, json } => {
            commands::users(&mut console, with_loans, json).await
        }

        Commands::AddBook {
            title,
            author,
            year,
            isbn,
        } => commands::add_book(&mut console, &title, &author, &year, &isbn).await,

        Commands::AddUser { name } => commands::add_user(&mut console, &name).await,

        Commands::Borrow { user, book } => {
            commands::borrow(&mut console, &user, book.as_deref()).await
        }

        Commands::Return { user, book } => commands::return_book(&mut console, &user, &book).await,

        Commands::Shell => {
            let stdin = std::io::stdin();
            commands::shell(&mut console, stdin.lock(), std::io::stdout()).await
        }
    }
}
