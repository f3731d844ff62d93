//! Performance detectors
//!
//! Same-line co-occurrence heuristics, not structural nesting analysis: a
//! query call and a loop keyword on one line is taken as a query-in-loop.

use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};

const QUERY_CALLS: &[&str] = &["$wpdb->query(", "$wpdb->get_", "get_posts("];
const LOOP_KEYWORDS: &[&str] = &["for (", "while (", "foreach ("];

/// Database-query call on the same line as a loop construct
pub struct QueryInLoop;

impl Detector for QueryInLoop {
    fn name(&self) -> &str {
        "query-in-loop"
    }

    fn category(&self) -> Category {
        Category::Performance
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if QUERY_CALLS.iter().any(|q| line.contains(q))
            && LOOP_KEYWORDS.iter().any(|l| line.contains(l))
        {
            return Some(
                Detection::new(
                    Severity::High,
                    "Database query in loop",
                    "Performing database queries inside loops can cause performance issues",
                )
                .with_suggestion("Move database queries outside loops or use batch processing."),
            );
        }
        None
    }
}

/// More than 10 concatenation dots on one line.
///
/// Counts every `.` character, so dotted literals contribute too.
pub struct StringConcatenation;

impl Detector for StringConcatenation {
    fn name(&self) -> &str {
        "string-concatenation"
    }

    fn category(&self) -> Category {
        Category::Performance
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.matches('.').count() > 10 {
            return Some(
                Detection::new(
                    Severity::Medium,
                    "Inefficient string concatenation",
                    "Excessive use of dot concatenation can impact performance",
                )
                .with_suggestion(
                    "Consider using sprintf() or implode() for complex string building.",
                ),
            );
        }
        None
    }
}
