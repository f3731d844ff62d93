//! Markdown report rendering
//!
//! Fixed section order: Summary, Critical, Performance, Standards, Minor,
//! Exemplary. Findings render in production order within their section and
//! empty sections are omitted. Rendering is deterministic: the same result
//! always yields byte-identical output.

use patchlint_core::{Category, Finding, ReviewResult};

/// Report sections in rendering order
const SECTIONS: [(Category, &str); 5] = [
    (Category::Critical, "## 🔴 Critical Issues (Must Fix)"),
    (Category::Performance, "## 🟡 Performance Issues"),
    (Category::Standards, "## 🟠 Standards Issues"),
    (Category::Minor, "## 🟢 Minor Issues (Consider Improving)"),
    (Category::Exemplary, "## 💙 Exemplary Code Highlights"),
];

/// Render a review result as a Markdown report.
///
/// A failed result renders as a single failure line instead of the
/// structured report.
pub fn format_report(result: &ReviewResult) -> String {
    if !result.success {
        return format!(
            "Code review failed: {}",
            result.error.as_deref().unwrap_or("Unknown error")
        );
    }

    let mut report: Vec<String> = Vec::new();
    report.push("# Code Review Report".to_string());
    report.push(String::new());

    let summary = &result.summary;
    report.push("## Summary".to_string());
    report.push(format!("- **Files Changed**: {}", summary.total_files));
    report.push(format!("- **Critical Issues**: {}", summary.critical_issues));
    report.push(format!("- **Minor Issues**: {}", summary.minor_issues));
    report.push(format!(
        "- **Exemplary Code Highlights**: {}",
        summary.exemplary_highlights
    ));
    report.push(format!(
        "- **Standards Violations**: {}",
        summary.standards_violations
    ));
    report.push(format!(
        "- **Performance Issues**: {}",
        summary.performance_issues
    ));
    report.push(String::new());

    for (category, heading) in SECTIONS {
        let findings: Vec<&Finding> = result.in_category(category).collect();
        if findings.is_empty() {
            continue;
        }

        report.push(heading.to_string());
        for finding in findings {
            report.push(format!("### {}", finding.description));
            report.push(format!("- **File**: `{}:{}`", finding.file, finding.line));
            report.push(format!(
                "- **Severity**: {}",
                finding.severity.to_string().to_uppercase()
            ));
            report.push(format!("- **Details**: {}", finding.details));
            if let Some(ref suggestion) = finding.suggestion {
                report.push(format!("- **Suggestion**: {}", suggestion));
            }
            report.push(String::new());
        }
    }

    report.join("\n")
}
