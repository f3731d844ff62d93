//! Patchlint CLI library — exposed for integration tests

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patchlint")]
#[command(about = "Rule-based code review for unified diffs", long_about = None)]
#[command(version = patchlint_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Severity threshold for non-zero exit: high, medium, low, never
    #[arg(long, global = true)]
    pub fail_on: Option<String>,

    /// Also write the Markdown report to this file
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .patchlint.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// Review a unified diff
    Review {
        /// Diff file to review ('-' reads from stdin)
        diff_file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
}
