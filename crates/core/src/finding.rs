//! Finding types that bridge the rule engine to output formatters

use crate::diff::FileChange;
use serde::{Deserialize, Serialize};

/// Review category of a finding.
///
/// Categories are additive: one added line may produce findings in any
/// combination of them. The derived `Ord` (declaration order) is the fixed
/// tie-break order used when merging findings deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Critical,
    Minor,
    Standards,
    Performance,
    Exemplary,
}

impl Category {
    /// All categories in detector-pass order.
    pub const ALL: [Category; 5] = [
        Category::Critical,
        Category::Minor,
        Category::Standards,
        Category::Performance,
        Category::Exemplary,
    ];
}

/// Severity level of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single finding from a review
///
/// Findings reference their file and line by value, so they stay valid
/// independently of the parse tree they were produced from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,

    pub severity: Severity,

    /// New-file path of the change that triggered the finding
    pub file: String,

    /// Computed new-file line number
    pub line: usize,

    /// Short human-readable title
    pub description: String,

    /// Longer explanation of why the line was flagged
    pub details: String,

    /// Human-readable remediation suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Per-category counts for an entire review run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_files: usize,
    pub critical_issues: usize,
    pub minor_issues: usize,
    pub standards_violations: usize,
    pub performance_issues: usize,
    pub exemplary_highlights: usize,
}

impl ReviewSummary {
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Critical => self.critical_issues += 1,
            Category::Minor => self.minor_issues += 1,
            Category::Standards => self.standards_violations += 1,
            Category::Performance => self.performance_issues += 1,
            Category::Exemplary => self.exemplary_highlights += 1,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Critical => self.critical_issues,
            Category::Minor => self.minor_issues,
            Category::Standards => self.standards_violations,
            Category::Performance => self.performance_issues,
            Category::Exemplary => self.exemplary_highlights,
        }
    }
}

/// The complete outcome of reviewing one diff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Parsed change model the findings were produced from
    pub files: Vec<FileChange>,

    /// All findings in production order (file, hunk, line, detector pass)
    pub findings: Vec<Finding>,

    pub summary: ReviewSummary,

    /// False when an internal fault was captured at the engine boundary
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewResult {
    /// A failed result carrying a captured error description.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            findings: Vec::new(),
            summary: ReviewSummary::default(),
            success: false,
            error: Some(error.into()),
        }
    }

    /// Findings of one category, in production order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// Check whether issue findings exceed the configured severity threshold.
    ///
    /// Exemplary highlights never count against the threshold.
    ///
    /// - `"high"` → fail if any high-severity issue
    /// - `"medium"` → fail if any high or medium issue
    /// - `"low"` → fail if any issue at all
    /// - `"never"` → always pass
    pub fn exceeds_threshold(&self, fail_on: &str) -> bool {
        let mut issues = self
            .findings
            .iter()
            .filter(|f| f.category != Category::Exemplary);

        match fail_on {
            "high" => issues.any(|f| f.severity == Severity::High),
            "medium" => issues.any(|f| matches!(f.severity, Severity::High | Severity::Medium)),
            "low" => issues
                .any(|f| matches!(f.severity, Severity::High | Severity::Medium | Severity::Low)),
            "never" => false,
            // default to "high" for unknown values
            _ => issues.any(|f| f.severity == Severity::High),
        }
    }
}
