//! Initialize .patchlint.toml configuration

use anyhow::Result;
use patchlint_core::PatchlintConfig;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(".patchlint.toml");

    if config_path.exists() {
        println!("⚠️  .patchlint.toml already exists at {:?}", config_path);
        return Ok(());
    }

    let config = PatchlintConfig::default();
    config.save(&config_path)?;

    println!("✅ Created .patchlint.toml at {:?}", config_path);
    println!("\nYou can now customize the configuration and run:");
    println!("  patchlint review <diff-file>");

    Ok(())
}
