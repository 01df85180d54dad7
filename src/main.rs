//! compare-size - artifact size tracking
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use compare_size::cli::{Cli, Commands};
use compare_size::config::ConfigManager;
use compare_size::error::{SizeError, SizeResult};
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> SizeResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("compare_size=warn"),
        1 => EnvFilter::new("compare_size=info"),
        _ => EnvFilter::new("compare_size=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| SizeError::io("getting current directory", e))?;
            ConfigManager::in_dir(&cwd)
        }
    };
    debug!("Using config {}", config_manager.path().display());

    let mut config = config_manager.load().await?;
    if let Some(cache) = cli.cache {
        config.compare.cache = cache;
    }

    // Dispatch to command
    match cli.command {
        Commands::Compare(args) => compare_size::cli::commands::compare(args, &config).await,
        Commands::List(args) => compare_size::cli::commands::list(args, &config).await,
        Commands::Add(args) => compare_size::cli::commands::add(args, &config).await,
        Commands::Remove(args) => compare_size::cli::commands::remove(args, &config).await,
        Commands::Prune(args) => compare_size::cli::commands::prune(args, &config).await,
        Commands::Empty => compare_size::cli::commands::empty(&config).await,
    }
}
