//! Terminal output formatting

use colored::Colorize;
use patchlint_core::{Category, ReviewResult, Severity};

/// Category labels shown as terminal section headers, in report order
const SECTIONS: [(Category, &str); 5] = [
    (Category::Critical, "Critical Issues"),
    (Category::Performance, "Performance Issues"),
    (Category::Standards, "Standards Issues"),
    (Category::Minor, "Minor Issues"),
    (Category::Exemplary, "Exemplary Code"),
];

pub fn format_finding(severity: Severity, description: &str, file: &str, line: usize) -> String {
    let icon = match severity {
        Severity::High => "❌",
        Severity::Medium => "⚠️ ",
        Severity::Low => "ℹ️ ",
        Severity::Info => "✅",
    };

    format!("  {} {} {}:{}", icon, description, file, line)
}

/// Print a colored review report to stdout.
pub fn print_report(result: &ReviewResult, color: bool) {
    if !color {
        colored::control::set_override(false);
    }

    if !result.success {
        println!(
            "{} {}",
            "Code review failed:".red().bold(),
            result.error.as_deref().unwrap_or("Unknown error")
        );
        return;
    }

    let summary = &result.summary;
    println!(
        "{}",
        format!("  patchlint v{} — diff review", patchlint_core::VERSION).bold()
    );
    println!();
    println!(
        "  {} file(s) changed — {} critical, {} performance, {} standards, {} minor, {} exemplary",
        summary.total_files,
        summary.critical_issues,
        summary.performance_issues,
        summary.standards_violations,
        summary.minor_issues,
        summary.exemplary_highlights,
    );

    for (category, label) in SECTIONS {
        let mut findings = result.in_category(category).peekable();
        if findings.peek().is_none() {
            continue;
        }

        println!();
        println!("{}", format!("  {}", label).bold());
        for finding in findings {
            println!(
                "{}",
                format_finding(
                    finding.severity,
                    &finding.description,
                    &finding.file,
                    finding.line
                )
            );
        }
    }

    if result.findings.is_empty() {
        println!();
        println!("  {}", "No findings.".green());
    }
}
