//! CLI administration tool for url-redirector.
//!
//! The service itself never creates records; this tool is how they get into
//! the store.
//!
//! # Usage
//!
//! ```bash
//! # Create or overwrite a record
//! cargo run --bin admin -- redirect set gh github.com/someone
//!
//! # Show a record and where it redirects
//! cargo run --bin admin -- redirect show gh
//!
//! # List all records
//! cargo run --bin admin -- redirect list
//!
//! # Check store connectivity
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `DATABASE_URL` / `DB_*`, `REDIS_URL` / `REDIS_*`.

use url_redirector::config::{self, Config};
use url_redirector::domain::entities::RedirectRecord;
use url_redirector::domain::repositories::RedirectRepository;
use url_redirector::infrastructure::store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing url-redirector records.
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
    /// Manage redirect records
    Redirect {
        #[command(subcommand)]
        action: RedirectAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Redirect record subcommands.
#[derive(Subcommand)]
enum RedirectAction {
    /// Create or overwrite a record
    Set {
        /// Short path (case-sensitive, may contain `/`)
        short_path: String,

        /// Destination URL; `https://` is added at redirect time if it lacks `http`
        url: String,

        /// Initial hit count
        #[arg(long, default_value_t = 0)]
        hits: i64,

        /// Skip confirmation when overwriting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a single record
    Show {
        /// Short path to look up
        short_path: String,
    },

    /// List all records
    List,
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let repo = store::connect(&config, true).await?;

    match cli.command {
        Commands::Redirect { action } => handle_redirect_action(action, repo).await?,
        Commands::Store { action } => handle_store_action(action, repo, &config).await?,
    }

    Ok(())
}

/// Dispatches redirect record commands.
async fn handle_redirect_action(
    action: RedirectAction,
    repo: Arc<dyn RedirectRepository>,
) -> Result<()> {
    match action {
        RedirectAction::Set {
            short_path,
            url,
            hits,
            yes,
        } => set_redirect(repo, short_path, url, hits, yes).await,
        RedirectAction::Show { short_path } => show_redirect(repo, short_path).await,
        RedirectAction::List => list_redirects(repo).await,
    }
}

/// Creates a record, asking before an existing one is replaced.
async fn set_redirect(
    repo: Arc<dyn RedirectRepository>,
    short_path: String,
    url: String,
    hits: i64,
    skip_confirm: bool,
) -> Result<()> {
    if short_path.is_empty() {
        anyhow::bail!("Short path must not be empty");
    }
    if url.is_empty() {
        anyhow::bail!("URL must not be empty");
    }
    if hits < 0 {
        anyhow::bail!("Hit count must not be negative, got {}", hits);
    }

    println!("{}", "🔗 Set Redirect".bright_blue().bold());
    println!();

    if let Some(existing) = repo.get(&short_path).await? {
        println!("{}", "⚠️  A record already exists:".yellow());
        println!("  URL:  {}", existing.url.cyan());
        println!("  Hits: {}", existing.hit_count.to_string().bright_black());
        println!();

        if !skip_confirm {
            let confirmed = Confirm::new()
                .with_prompt("Overwrite it?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }
    }

    let record = RedirectRecord::new(short_path, url, hits);
    repo.put(&record)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save record: {}", e))?;

    println!("{}", "✅ Record saved".green().bold());
    println!("  /{} → {}", record.short_path.cyan(), record.location().bright_white());
    println!();

    Ok(())
}

/// Prints one record and the Location it resolves to.
async fn show_redirect(repo: Arc<dyn RedirectRepository>, short_path: String) -> Result<()> {
    let record = repo
        .get(&short_path)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?
        .context("Record not found")?;

    println!("  Short path: {}", record.short_path.cyan());
    println!("  URL:        {}", record.url);
    println!("  Location:   {}", record.location().bright_white());
    println!(
        "  Hits:       {}",
        record.hit_count.to_string().bright_green().bold()
    );

    Ok(())
}

/// Lists all records.
///
/// # Output Format
///
/// ```text
/// 📋 Redirects
///
///   Short path           Hits       URL
///   ──────────────────────────────────────────────────────────────────
///   gh                   42         github.com/someone
/// ```
async fn list_redirects(repo: Arc<dyn RedirectRepository>) -> Result<()> {
    println!("{}", "📋 Redirects".bright_blue().bold());
    println!();

    let records = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list records: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No records found".yellow());
        println!();
        println!(
            "  Create one with: {} admin redirect set <short-path> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<10} {}",
        "Short path".bright_white().bold(),
        "Hits".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for record in &records {
        println!(
            "  {:<20} {:<10} {}",
            record.short_path.cyan(),
            record.hit_count.to_string().bright_black(),
            record.url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(
    action: StoreAction,
    repo: Arc<dyn RedirectRepository>,
    config: &Config,
) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!(
                "{}",
                format!("🔍 Checking {} store...", config.store_backend).bright_blue()
            );

            if !repo.health_check().await {
                anyhow::bail!("Store did not answer");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
