pub mod commands;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Run clang-tidy with assignment-specific checks and options
#[derive(Parser, Debug)]
#[command(name = "run-analyzer", version, about = "Run clang-tidy with assignment-specific options")]
pub struct Cli {
    /// Location of Clang-tidy executable
    #[arg(short = 't', value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Location JSON file containing assignment declarations
    #[arg(short = 'd', value_name = "PATH")]
    pub declarations: Option<PathBuf>,

    /// Use local compilation database, if available
    #[arg(short = 'c')]
    pub compilation_db: bool,

    /// File to analyze
    pub file: Option<PathBuf>,

    /// Print the analyzer command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
