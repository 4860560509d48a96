//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Structural health analyzer for component catalogs
#[derive(Parser, Debug)]
#[command(name = "archhealth")]
#[command(
    about = "Scores a codebase snapshot for coupling, duplication, complexity and dependency cycles"
)]
#[command(version)]
pub struct Cli {
    /// Component catalog (JSON array of component records)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Directory the catalog paths are relative to
    #[arg(short, long, default_value = ".", env = "ARCHHEALTH_ROOT")]
    pub root: PathBuf,

    /// TOML file overriding analysis thresholds
    #[arg(short, long, env = "ARCHHEALTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json", value_enum)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON - the analysis record as structured data
    #[default]
    Json,
    /// Human-readable report
    Text,
}
