//! Security-critical detectors
//!
//! Flags added lines where dangerous calls co-occur with a superglobal-style
//! input marker (`$_`), indicating unvalidated request data flowing into
//! code execution, SQL, or file inclusion. Same-line co-occurrence only; no
//! cross-line taint tracking.

use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};

/// Textual indicator of direct access to unvalidated request data
/// (`$_POST`, `$_GET`, `$_REQUEST`, ...).
const SUPERGLOBAL_MARKER: &str = "$_";

/// eval() combined with a superglobal input marker
pub struct CodeInjection;

impl Detector for CodeInjection {
    fn name(&self) -> &str {
        "code-injection"
    }

    fn category(&self) -> Category {
        Category::Critical
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("eval(") && line.contains(SUPERGLOBAL_MARKER) {
            return Some(
                Detection::new(
                    Severity::High,
                    "Potential code injection vulnerability",
                    "Using eval() with user input can lead to remote code execution",
                )
                .with_suggestion(
                    "Avoid using eval() with user input. Use proper validation and \
                     sanitization instead.",
                ),
            );
        }
        None
    }
}

/// Raw mysql_query() call fed with a superglobal input marker
pub struct SqlInjection;

impl Detector for SqlInjection {
    fn name(&self) -> &str {
        "sql-injection"
    }

    fn category(&self) -> Category {
        Category::Critical
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("mysql_query(") && line.contains(SUPERGLOBAL_MARKER) {
            return Some(
                Detection::new(
                    Severity::High,
                    "Potential SQL injection vulnerability",
                    "Direct MySQL queries with user input without proper escaping",
                )
                .with_suggestion(
                    "Use prepared statements or the database abstraction layer with \
                     proper escaping.",
                ),
            );
        }
        None
    }
}

/// Request-superglobal access on a nonce-related line that never calls
/// wp_verify_nonce()
pub struct MissingNonce;

impl Detector for MissingNonce {
    fn name(&self) -> &str {
        "missing-nonce"
    }

    fn category(&self) -> Category {
        Category::Critical
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if !line.contains("wp_verify_nonce")
            && line.to_lowercase().contains("nonce")
            && (line.contains("$_POST") || line.contains("$_GET"))
        {
            return Some(
                Detection::new(
                    Severity::High,
                    "Missing nonce verification",
                    "Processing form data without verifying nonce for CSRF protection",
                )
                .with_suggestion("Add wp_verify_nonce() to validate form submissions."),
            );
        }
        None
    }
}

/// include()/require() with a superglobal input marker
pub struct FileInclusion;

impl Detector for FileInclusion {
    fn name(&self) -> &str {
        "file-inclusion"
    }

    fn category(&self) -> Category {
        Category::Critical
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if (line.contains("include(") || line.contains("require("))
            && line.contains(SUPERGLOBAL_MARKER)
        {
            return Some(
                Detection::new(
                    Severity::High,
                    "Potential file inclusion vulnerability",
                    "Including files with user-controlled input without proper validation",
                )
                .with_suggestion(
                    "Validate and sanitize file paths before inclusion. Use fixed paths \
                     when possible.",
                ),
            );
        }
        None
    }
}
