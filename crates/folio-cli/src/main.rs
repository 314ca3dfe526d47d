//! folio - fetch and display portfolio data from GitHub, Medium and LinkedIn.
//!
//! This binary is a terminal presenter over `folio-core`: it refreshes the
//! cached sources and renders whatever is available.

mod render;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_core::cache::{CacheManager, FileStore};
use folio_core::{
    AggregatedResult, CacheStore, Config, MemoryStore, RefreshOptions, SocialDataFetcher,
};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio data from GitHub, Medium and LinkedIn")]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, env = "FOLIO_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch every source (using the cache when fresh) and print it
    Refresh(RefreshArgs),
    /// Show how old each cached source is
    Status,
    /// Remove all cached source data
    ClearCache,
}

#[derive(Debug, Default, Args)]
struct RefreshArgs {
    /// Ignore cached data and fetch every source again
    #[arg(short, long)]
    force: bool,

    /// Print the aggregated result as JSON
    #[arg(long)]
    json: bool,

    /// Keep the cache in memory for this run only
    #[arg(long)]
    no_cache: bool,
}

/// Initialize the tracing subscriber for logging.
/// Returns the file writer guard, which must live until exit.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "folio.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // An explicitly named config must load; the default one falls back
    let (config, config_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_none() => (Config::default(), Some(e)),
        Err(e) => return Err(e),
    };

    let _guard = init_tracing(config.log_dir.as_deref());
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    info!("folio starting");

    match cli.command.unwrap_or(Command::Refresh(RefreshArgs::default())) {
        Command::Refresh(args) if args.no_cache => {
            let fetcher = SocialDataFetcher::new(&config, MemoryStore::new())?;
            refresh(&fetcher, &args).await
        }
        Command::Refresh(args) => {
            let fetcher = SocialDataFetcher::from_config(&config)?;
            refresh(&fetcher, &args).await
        }
        Command::Status => {
            let cache = CacheManager::new(file_store(&config)?, config.cache_ttl());
            println!("{}", render::render_status(&cache.status()));
            Ok(())
        }
        Command::ClearCache => {
            let cache = CacheManager::new(file_store(&config)?, config.cache_ttl());
            cache.clear_all();
            println!("Cache cleared");
            Ok(())
        }
    }
}

fn file_store(config: &Config) -> Result<FileStore> {
    let dir = config.cache_dir().context("Failed to resolve cache directory")?;
    Ok(FileStore::new(dir))
}

async fn refresh<S: CacheStore>(fetcher: &SocialDataFetcher<S>, args: &RefreshArgs) -> Result<()> {
    let options = RefreshOptions {
        force_refresh: args.force,
    };
    let result: AggregatedResult = fetcher.refresh_all(options).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render::render_result(&result));
    }

    let missing = result.missing_sources();
    if !missing.is_empty() {
        warn!(?missing, "Some sources are unavailable");
    }
    Ok(())
}
