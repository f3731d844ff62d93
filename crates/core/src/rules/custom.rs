//! Custom rules — user-defined regex-based detectors from `.patchlint.toml`
//!
//! Lets teams flag project-specific patterns (banned APIs, naming
//! conventions, sensitive keywords) without writing Rust code. Invalid
//! patterns are skipped with a warning on stderr rather than failing the
//! whole rule set.

use crate::config::CustomRule;
use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};
use glob::Pattern;
use regex::Regex;

/// A single compiled custom rule ready for matching
pub struct CompiledRule {
    name: String,
    regex: Regex,
    globs: Vec<Pattern>,
    category: Category,
    severity: Severity,
    message: String,
    suggestion: Option<String>,
}

/// Compile config rules, skipping invalid ones with a warning on stderr.
pub fn compile(rules: &[CustomRule]) -> Vec<CompiledRule> {
    let mut compiled = Vec::new();

    for rule in rules {
        let name = rule.id.clone().unwrap_or_else(|| rule.pattern.clone());

        let regex = match Regex::new(&rule.pattern) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  warn: skipping custom rule {name:?} — invalid regex: {e}");
                continue;
            }
        };

        let mut globs = Vec::new();
        for path_glob in &rule.paths {
            match Pattern::new(path_glob) {
                Ok(p) => globs.push(p),
                Err(e) => {
                    eprintln!("  warn: skipping glob '{path_glob}' in custom rule {name:?}: {e}");
                }
            }
        }

        let category = match rule.category.to_lowercase().as_str() {
            "critical" => Category::Critical,
            "minor" => Category::Minor,
            "standards" => Category::Standards,
            "performance" => Category::Performance,
            "exemplary" => Category::Exemplary,
            other => {
                eprintln!(
                    "  warn: unknown category '{other}' in custom rule {name:?}, \
                     defaulting to standards"
                );
                Category::Standards
            }
        };

        let severity = match rule.severity.to_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "info" => Severity::Info,
            other => {
                eprintln!(
                    "  warn: unknown severity '{other}' in custom rule {name:?}, \
                     defaulting to medium"
                );
                Severity::Medium
            }
        };

        compiled.push(CompiledRule {
            name,
            regex,
            globs,
            category,
            severity,
            message: rule.message.clone(),
            suggestion: rule.suggestion.clone(),
        });
    }

    compiled
}

impl Detector for CompiledRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if self.regex.is_match(line) {
            let mut detection = Detection::new(
                self.severity,
                &self.message,
                format!("Line matches the project rule pattern `{}`", self.regex.as_str()),
            );
            detection.suggestion = self.suggestion.clone();
            return Some(detection);
        }
        None
    }

    /// If the rule has no globs, it matches all files.
    fn applies_to(&self, file: &str) -> bool {
        self.globs.is_empty() || self.globs.iter().any(|g| g.matches(file))
    }
}
