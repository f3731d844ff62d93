//! Main review command — wires config, rule set, engine, and output together

use anyhow::{Context, Result};
use patchlint_core::{PatchlintConfig, ReviewEngine, RuleSet};
use std::io::Read;
use std::path::Path;

use crate::output;
use crate::{Cli, OutputFormat};

/// Run a review. Returns true when the fail-on threshold was exceeded (or
/// the review itself failed), so the caller can set the exit code.
pub fn run(diff_file: &Path, cli: &Cli) -> Result<bool> {
    let diff_text = read_diff(diff_file)?;

    let current_dir = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = PatchlintConfig::find_and_load(&current_dir)
        .context("Failed to load .patchlint.toml")?;

    let format = resolve_format(cli, &config);
    let fail_on = cli
        .fail_on
        .clone()
        .unwrap_or_else(|| config.general.fail_on.clone());

    let engine = ReviewEngine::new(RuleSet::from_config(&config));
    let result = engine.review(&diff_text);

    match format {
        OutputFormat::Terminal => output::terminal::print_report(&result, config.output.color),
        OutputFormat::Markdown => println!("{}", output::markdown::format_report(&result)),
        OutputFormat::Json => println!("{}", output::json::to_json(&result)?),
    }

    if let Some(ref report_path) = cli.output {
        let report = output::markdown::format_report(&result);
        std::fs::write(report_path, report)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        println!("\nFull report saved to: {}", report_path.display());
    }

    Ok(!result.success || result.exceeds_threshold(&fail_on))
}

/// Read the diff from a file, or from stdin when the path is `-`.
fn read_diff(diff_file: &Path) -> Result<String> {
    if diff_file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read diff from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(diff_file)
            .with_context(|| format!("Failed to read diff file {}", diff_file.display()))
    }
}

/// CLI flag wins over the config default.
fn resolve_format(cli: &Cli, config: &PatchlintConfig) -> OutputFormat {
    if let Some(format) = cli.format {
        return format;
    }

    match config.output.format.as_str() {
        "markdown" => OutputFormat::Markdown,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Terminal,
    }
}
