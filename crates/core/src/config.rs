//! Configuration file parsing for .patchlint.toml

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or saving a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A user-defined regex-based rule in `.patchlint.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    /// Optional human-readable identifier (e.g., "no-var-dump")
    #[serde(default)]
    pub id: Option<String>,

    /// Regex pattern (Rust `regex` crate syntax) matched against added lines
    pub pattern: String,

    /// Message shown when the pattern matches
    pub message: String,

    /// Category: "critical", "minor", "standards", "performance", or "exemplary"
    #[serde(default = "default_rule_category")]
    pub category: String,

    /// Severity: "high", "medium", "low", or "info"
    #[serde(default = "default_rule_severity")]
    pub severity: String,

    /// Glob patterns matched against the new-file path (e.g., `["*.php"]`).
    /// Empty means the rule applies to every file.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Optional fix suggestion shown to the user
    #[serde(default)]
    pub suggestion: Option<String>,
}

fn default_rule_category() -> String {
    "standards".to_string()
}

fn default_rule_severity() -> String {
    "medium".to_string()
}

/// Main configuration structure for .patchlint.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchlintConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub passes: PassesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// User-defined custom rules
    #[serde(default, rename = "rules")]
    pub rules: Vec<CustomRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Localization text domain expected in translation calls
    #[serde(default = "default_text_domain")]
    pub text_domain: String,

    /// Maximum allowed line length before a minor finding is raised
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Severity threshold for non-zero exit code
    #[serde(default = "default_fail_on")]
    pub fail_on: String,
}

/// Enable/disable the builtin detector passes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassesConfig {
    #[serde(default = "default_true")]
    pub critical: bool,

    #[serde(default = "default_true")]
    pub minor: bool,

    #[serde(default = "default_true")]
    pub standards: bool,

    #[serde(default = "default_true")]
    pub performance: bool,

    #[serde(default = "default_true")]
    pub exemplary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable color output
    #[serde(default = "default_true")]
    pub color: bool,
}

// Default functions
fn default_text_domain() -> String {
    "multi-entity-ticket-system".to_string()
}

fn default_max_line_length() -> usize {
    120
}

fn default_fail_on() -> String {
    "high".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for PatchlintConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            passes: PassesConfig::default(),
            output: OutputConfig::default(),
            rules: Vec::new(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            text_domain: default_text_domain(),
            max_line_length: default_max_line_length(),
            fail_on: default_fail_on(),
        }
    }
}

impl Default for PassesConfig {
    fn default() -> Self {
        Self {
            critical: true,
            minor: true,
            standards: true,
            performance: true,
            exemplary: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl PatchlintConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: PatchlintConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .patchlint.toml from the given directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(".patchlint.toml");
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
