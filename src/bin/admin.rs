//! CLI administration tool for linkcode.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up a code
//! cargo run --bin admin -- resolve aZ3kP0qx
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection, required
//! - `BASE_URL`, `CODE_MAX_ATTEMPTS`: as for the server

use linkcode::application::services::{ShortenError, ShortenerService};
use linkcode::config;
use linkcode::domain::repositories::LinkStore;
use linkcode::infrastructure::persistence::PgLinkStore;
use linkcode::server::{connect_pool, run_migrations};
use linkcode::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkcode.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// URL to shorten (stored verbatim)
        url: String,
    },

    /// Show the URL stored under a code
    Resolve {
        /// Short code (case-sensitive)
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = connect_pool(&config, &database_url)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&pool).await?;

    match cli.command {
        Commands::Shorten { url } => {
            let service = ShortenerService::new(
                Arc::new(PgLinkStore::new(Arc::new(pool))),
                Arc::new(RandomCodeGenerator::new()),
            )
            .with_max_attempts(config.code_max_attempts);

            shorten(&service, &config.base_url, &url).await?;
        }
        Commands::Resolve { code } => resolve(pool, &code).await?,
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Shortens a URL and prints the code and public short URL.
///
/// Invalid input is an error, so the process exits non-zero.
async fn shorten<S, G>(
    service: &ShortenerService<S, G>,
    base_url: &str,
    url: &str,
) -> Result<String>
where
    S: LinkStore + ?Sized,
    G: CodeGenerator + ?Sized,
{
    let code = match service.shorten(url).await {
        Ok(code) => code,
        Err(ShortenError::InvalidInput(reason)) => {
            anyhow::bail!("Invalid URL '{}': {}", url, reason);
        }
        Err(e) => return Err(e).context("Failed to shorten URL"),
    };

    println!("{}", "✅ Link created".green().bold());
    println!();
    println!("  Code:      {}", code.bright_yellow().bold());
    println!("  Short URL: {}", service.short_url(base_url, &code).cyan());
    println!("  Target:    {}", url.bright_white());
    println!();

    Ok(code)
}

/// Prints the target stored under a code.
async fn resolve(pool: PgPool, code: &str) -> Result<()> {
    let store = PgLinkStore::new(Arc::new(pool));

    let link = store
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match link {
        Some(link) => {
            println!("  Code:    {}", link.code.bright_yellow());
            println!("  Target:  {}", link.target.cyan());
            println!(
                "  Created: {}",
                link.created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
        }
        None => {
            println!("{} {}", "⚠️  No link stored under".yellow(), code.bold());
        }
    }

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(pool: PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let store = PgLinkStore::new(Arc::new(pool));
    let links_count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
