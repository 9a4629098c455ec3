//! Homebound main entry point
//!
//! This is the command-line interface for the Homebound crawler.

use anyhow::{Context, Result};
use clap::Parser;
use homebound::config::{load_config_with_hash, Config};
use homebound::crawler::Coordinator;
use homebound::output::{load_report, print_report};
use homebound::storage::{open_storage, StorageError};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Homebound: a same-origin web crawler
///
/// Homebound starts from a list of seed addresses and follows links that stay
/// on each page's own origin, breadth-first, down to a fixed depth. Visited
/// addresses are kept in a SQLite database and never fetched twice.
#[derive(Parser, Debug)]
#[command(name = "homebound")]
#[command(version)]
#[command(about = "A bounded-depth, same-origin web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the addresses already in the database and exit
    #[arg(long)]
    report: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_hash) = match &cli.config {
        Some(path) => load_config_with_hash(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => (Config::default(), "built-in defaults".to_string()),
    };

    let log_path = config.output.log_path.as_deref().map(Path::new);
    setup_logging(cli.verbose, cli.quiet, log_path)?;

    match &cli.config {
        Some(path) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            config_hash
        ),
        None => tracing::info!("No configuration file given, using {}", config_hash),
    }

    if cli.report {
        handle_report(&config, log_path)
    } else {
        handle_crawl(&config, log_path).await
    }
}

/// Sets up the logging/tracing subscriber
///
/// Events go to `log_path` when given (appending, no colors), otherwise to
/// stderr.
fn setup_logging(verbose: u8, quiet: bool, log_path: Option<&Path>) -> Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("homebound=info,warn"),
            1 => EnvFilter::new("homebound=debug,info"),
            2 => EnvFilter::new("homebound=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);

    match log_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Handles the --report mode: lists stored addresses without crawling
fn handle_report(config: &Config, log_path: Option<&Path>) -> Result<()> {
    let storage = open_storage(Path::new(&config.output.database_path)).with_context(|| {
        format!("Failed to open database {}", config.output.database_path)
    })?;

    let report = load_report(&storage).context("Failed to read visited addresses")?;
    print_report(&report, log_path)?;

    Ok(())
}

/// Handles the main crawl operation, then prints the report
async fn handle_crawl(config: &Config, log_path: Option<&Path>) -> Result<()> {
    tracing::info!(
        "Seeds: {}, max depth: {}, database: {}",
        config.seeds.len(),
        config.crawler.max_depth,
        config.output.database_path
    );

    let mut coordinator = Coordinator::new(config).context("Failed to start crawler")?;

    let summary = match coordinator.run().await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).context("Crawl failed");
        }
    };
    tracing::info!("{} addresses in database", summary.visited_total);

    let report = {
        let storage = coordinator.storage();
        let guard = storage.lock().map_err(|_| StorageError::LockPoisoned)?;
        load_report(&*guard).context("Failed to read visited addresses")?
    };
    print_report(&report, log_path)?;

    Ok(())
}
