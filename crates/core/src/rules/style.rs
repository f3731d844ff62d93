//! Style/minor detectors: readability and formatting nits

use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};
use regex::Regex;
use std::sync::OnceLock;

/// Control-structure openers, matched case-insensitively
const CONTROL_KEYWORDS: &[&str] = &["if (", "for (", "while (", "foreach ("];

/// Line exceeding the configured length limit
pub struct LongLine {
    limit: usize,
}

impl LongLine {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Detector for LongLine {
    fn name(&self) -> &str {
        "long-line"
    }

    fn category(&self) -> Category {
        Category::Minor
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        let length = line.chars().count();
        if length > self.limit {
            return Some(
                Detection::new(
                    Severity::Low,
                    "Line too long",
                    format!(
                        "Line length ({} characters) exceeds recommended limit of {} characters",
                        length, self.limit
                    ),
                )
                .with_suggestion("Break long lines into multiple lines for better readability."),
            );
        }
        None
    }
}

/// Control-structure line with more than 2 `&&` or more than 2 `||`
/// and no explanatory comment
pub struct ComplexCondition;

impl Detector for ComplexCondition {
    fn name(&self) -> &str {
        "complex-condition"
    }

    fn category(&self) -> Category {
        Category::Minor
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        let lower = line.to_lowercase();
        let is_control = CONTROL_KEYWORDS.iter().any(|k| lower.contains(k));
        if !is_control {
            return None;
        }

        // Operator kinds are counted separately; either exceeding the
        // threshold marks the condition complex.
        let ands = line.matches("&&").count();
        let ors = line.matches("||").count();
        if ands <= 2 && ors <= 2 {
            return None;
        }

        let has_comment = line.contains("//") || line.contains("/*") || line.contains('#');
        if has_comment {
            return None;
        }

        Some(
            Detection::new(
                Severity::Low,
                "Complex condition without comment",
                "Complex conditional logic lacks explanatory comments",
            )
            .with_suggestion("Add comments to explain the purpose of complex conditions."),
        )
    }
}

/// Control keyword glued to its opening parenthesis, e.g. `if(`
pub struct KeywordSpacing;

fn glued_keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:if|for|while|foreach)\(").expect("keyword spacing regex is valid")
    })
}

impl Detector for KeywordSpacing {
    fn name(&self) -> &str {
        "keyword-spacing"
    }

    fn category(&self) -> Category {
        Category::Minor
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if glued_keyword_regex().is_match(line) {
            return Some(
                Detection::new(
                    Severity::Low,
                    "Missing space after control structure keyword",
                    "Missing space between control structure keyword and opening parenthesis",
                )
                .with_suggestion(
                    "Add space after control structure keywords (if, for, while, foreach).",
                ),
            );
        }
        None
    }
}
