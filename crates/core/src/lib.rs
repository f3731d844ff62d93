//! Patchlint Core - Diff Review Engine
//!
//! This crate provides the analysis pipeline behind Patchlint:
//! - Unified diff parsing into a structured change model
//! - Category detector passes over every added line
//! - Review orchestration with a non-propagating fault boundary
//! - Configuration with user-defined custom rules

pub mod config;
pub mod diff;
pub mod engine;
pub mod finding;
pub mod rules;

pub use config::{ConfigError, CustomRule, PatchlintConfig};
pub use diff::{FileChange, Hunk, Line, LineKind};
pub use engine::ReviewEngine;
pub use finding::{Category, Finding, ReviewResult, ReviewSummary, Severity};
pub use rules::{Detection, Detector, RuleSet};

/// Patchlint version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
