//! Standards-compliance detectors: localization, escaping, sanitization

use crate::finding::{Category, Severity};
use crate::rules::{Detection, Detector};

/// Translation-wrapper call missing the configured text domain
pub struct TextDomain {
    domain: String,
}

impl TextDomain {
    pub fn new(domain: String) -> Self {
        Self { domain }
    }
}

impl Detector for TextDomain {
    fn name(&self) -> &str {
        "text-domain"
    }

    fn category(&self) -> Category {
        Category::Standards
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if (line.contains("__(") || line.contains("_e(")) && !line.contains(&self.domain) {
            return Some(
                Detection::new(
                    Severity::Medium,
                    "Missing or incorrect text domain",
                    format!(
                        "Text domain should be \"{}\" for proper internationalization",
                        self.domain
                    ),
                )
                .with_suggestion("Ensure all translation functions use the correct text domain."),
            );
        }
        None
    }
}

/// echo of an interpolated variable without an escaping call on the line
pub struct OutputEscaping;

impl Detector for OutputEscaping {
    fn name(&self) -> &str {
        "output-escaping"
    }

    fn category(&self) -> Category {
        Category::Standards
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if line.contains("echo")
            && line.contains('$')
            && !line.contains("esc_html")
            && !line.contains("esc_attr")
        {
            return Some(
                Detection::new(
                    Severity::Medium,
                    "Missing output escaping",
                    "Output should be properly escaped to prevent XSS vulnerabilities",
                )
                .with_suggestion(
                    "Use esc_html(), esc_attr(), or other appropriate escaping functions.",
                ),
            );
        }
        None
    }
}

/// Direct superglobal array access without sanitization or validation
pub struct InputSanitization;

impl Detector for InputSanitization {
    fn name(&self) -> &str {
        "input-sanitization"
    }

    fn category(&self) -> Category {
        Category::Standards
    }

    fn detect(&self, line: &str) -> Option<Detection> {
        if (line.contains("$_POST[") || line.contains("$_GET["))
            && !line.contains("sanitize")
            && !line.contains("validate")
        {
            return Some(
                Detection::new(
                    Severity::Medium,
                    "Missing input sanitization",
                    "User input should be sanitized before use",
                )
                .with_suggestion(
                    "Use appropriate sanitization functions like sanitize_text_field().",
                ),
            );
        }
        None
    }
}
