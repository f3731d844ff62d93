//! Line detectors and the rule set that groups them into category passes
//!
//! Every detector is a pure predicate over one added line's text: total for
//! any input string, no shared state, no I/O. A [`RuleSet`] owns the boxed
//! detectors of the enabled passes plus any custom rules compiled from
//! config, and runs all of them over a line — categories are additive, so a
//! single line may trigger any combination of them.

pub mod custom;
pub mod exemplary;
pub mod performance;
pub mod security;
pub mod standards;
pub mod style;

use crate::config::PatchlintConfig;
use crate::finding::{Category, Finding, Severity};

/// What a detector reports when a line matches
#[derive(Debug, Clone)]
pub struct Detection {
    pub severity: Severity,
    pub description: String,
    pub details: String,
    pub suggestion: Option<String>,
}

impl Detection {
    fn new(severity: Severity, description: &str, details: impl Into<String>) -> Self {
        Self {
            severity,
            description: description.to_string(),
            details: details.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Trait for single-line detectors
pub trait Detector: Send + Sync {
    /// Stable machine-readable name of this detector
    fn name(&self) -> &str;

    /// Category the detector reports under
    fn category(&self) -> Category;

    /// Inspect one added line. Must be total: never fails or panics for
    /// any input string, including empty ones.
    fn detect(&self, line: &str) -> Option<Detection>;

    /// Whether this detector applies to the given new-file path.
    /// Builtin detectors apply everywhere; custom rules may scope by glob.
    fn applies_to(&self, _file: &str) -> bool {
        true
    }
}

/// An immutable collection of detectors grouped by category pass.
///
/// Built once per review and passed by reference; holds no mutable state.
pub struct RuleSet {
    detectors: Vec<Box<dyn Detector>>,
}

impl RuleSet {
    /// Build the rule set for a configuration: builtin passes that are
    /// enabled, then custom rules compiled from `[[rules]]` tables.
    pub fn from_config(config: &PatchlintConfig) -> Self {
        let mut detectors: Vec<Box<dyn Detector>> = Vec::new();

        if config.passes.critical {
            detectors.push(Box::new(security::CodeInjection));
            detectors.push(Box::new(security::SqlInjection));
            detectors.push(Box::new(security::MissingNonce));
            detectors.push(Box::new(security::FileInclusion));
        }

        if config.passes.minor {
            detectors.push(Box::new(style::LongLine::new(config.general.max_line_length)));
            detectors.push(Box::new(style::ComplexCondition));
            detectors.push(Box::new(style::KeywordSpacing));
        }

        if config.passes.standards {
            detectors.push(Box::new(standards::TextDomain::new(
                config.general.text_domain.clone(),
            )));
            detectors.push(Box::new(standards::OutputEscaping));
            detectors.push(Box::new(standards::InputSanitization));
        }

        if config.passes.performance {
            detectors.push(Box::new(performance::QueryInLoop));
            detectors.push(Box::new(performance::StringConcatenation));
        }

        if config.passes.exemplary {
            detectors.push(Box::new(exemplary::NonceVerification));
            detectors.push(Box::new(exemplary::SanitizationUsage));
            detectors.push(Box::new(exemplary::ErrorHandling));
        }

        for rule in custom::compile(&config.rules) {
            detectors.push(Box::new(rule));
        }

        Self { detectors }
    }

    /// All builtin detectors with default settings.
    pub fn builtin() -> Self {
        Self::from_config(&PatchlintConfig::default())
    }

    /// Run every applicable detector over one added line, producing owned
    /// findings for `file`:`line_number`.
    pub fn scan_line(&self, file: &str, line_number: usize, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for detector in &self.detectors {
            if !detector.applies_to(file) {
                continue;
            }

            if let Some(detection) = detector.detect(text) {
                findings.push(Finding {
                    category: detector.category(),
                    severity: detection.severity,
                    file: file.to_string(),
                    line: line_number,
                    description: detection.description,
                    details: detection.details,
                    suggestion: detection.suggestion,
                });
            }
        }

        findings
    }

    /// Register an additional detector at the end of the pass order.
    pub fn push(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    /// Names of all registered detectors, in pass order.
    pub fn detector_names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
