//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// compare-size - track artifact sizes across branches
///
/// Measures raw and compressed sizes of build outputs and compares them
/// with sizes recorded for branch tips and named labels.
#[derive(Parser, Debug)]
#[command(name = "compare-size")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (defaults to ./compare-size.toml)
    #[arg(short, long, global = true, env = "COMPARE_SIZE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Size cache file (overrides config)
    #[arg(long, global = true, env = "COMPARE_SIZE_CACHE")]
    pub cache: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure files and compare with recorded sizes
    Compare(CompareArgs),

    /// List recorded labels
    List(ListArgs),

    /// Save the last run under one or more labels
    Add(LabelArgs),

    /// Remove labels
    Remove(LabelArgs),

    /// Remove all labels except those given (all data if none given)
    Prune(PruneArgs),

    /// Delete the size cache
    Empty,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Files to measure (defaults to [compare].files from config)
    pub files: Vec<String>,

    /// Compressors to apply (comma-separated, e.g. gz)
    #[arg(long, value_delimiter = ',', conflicts_with = "no_compress")]
    pub compress: Vec<String>,

    /// Measure raw sizes only
    #[arg(long)]
    pub no_compress: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments naming labels
#[derive(Parser, Debug)]
pub struct LabelArgs {
    /// Label names
    #[arg(required = true)]
    pub labels: Vec<String>,
}

/// Arguments for the prune command
#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Labels to keep
    pub keep: Vec<String>,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
