//! Exemplary-code detectors: positive highlights worth calling out

use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};

/// Proper nonce verification present on the line
pub struct NonceVerification;

impl Detector for NonceVerification {
    fn name(&self) -> &str {
        "nonce-verification"
    }

    fn category(&self) -> Category {
        Category::Exemplary
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("wp_verify_nonce") {
            return Some(Detection::new(
                Severity::Info,
                "Good security practice",
                "Proper nonce verification for CSRF protection",
            ));
        }
        None
    }
}

/// Sanitization or localization helper calls present on the line
pub struct SanitizationUsage;

impl Detector for SanitizationUsage {
    fn name(&self) -> &str {
        "sanitization-usage"
    }

    fn category(&self) -> Category {
        Category::Exemplary
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("sanitize_text_field") || line.contains("esc_html__") {
            return Some(Detection::new(
                Severity::Info,
                "Follows coding standards",
                "Proper use of sanitization and internationalization functions",
            ));
        }
        None
    }
}

/// Error check combined with a user-friendly abort on the same line
pub struct ErrorHandling;

impl Detector for ErrorHandling {
    fn name(&self) -> &str {
        "error-handling"
    }

    fn category(&self) -> Category {
        Category::Exemplary
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("is_wp_error") && line.contains("wp_die") {
            return Some(Detection::new(
                Severity::Info,
                "Good error handling",
                "Proper error checking and user-friendly error messages",
            ));
        }
        None
    }
}
