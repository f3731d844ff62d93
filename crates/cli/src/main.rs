//! Patchlint CLI - diff review agent

use anyhow::Result;
use clap::Parser;
use patchlint_cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { ref path } => {
            commands::init::run(path.as_deref())?;
        }
        Commands::Review { ref diff_file } => {
            let threshold_exceeded = commands::review::run(diff_file, &cli)?;
            if threshold_exceeded {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
