use patchlint_core::{
    Category, Finding, ReviewResult, ReviewSummary, Severity,
};

fn make_finding(category: Category, severity: Severity, line: usize) -> Finding {
    Finding {
        category,
        severity,
        file: "a.php".to_string(),
        line,
        description: "desc".to_string(),
        details: "details".to_string(),
        suggestion: None,
    }
}

fn result_with(findings: Vec<Finding>) -> ReviewResult {
    let mut summary = ReviewSummary::default();
    for f in &findings {
        summary.record(f.category);
    }
    ReviewResult {
        files: Vec::new(),
        findings,
        summary,
        success: true,
        error: None,
    }
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::High.to_string(), "high");
    assert_eq!(Severity::Medium.to_string(), "medium");
    assert_eq!(Severity::Low.to_string(), "low");
    assert_eq!(Severity::Info.to_string(), "info");
}

#[test]
fn test_summary_record_and_count() {
    let mut summary = ReviewSummary::default();
    summary.record(Category::Critical);
    summary.record(Category::Critical);
    summary.record(Category::Exemplary);

    assert_eq!(summary.count(Category::Critical), 2);
    assert_eq!(summary.count(Category::Exemplary), 1);
    assert_eq!(summary.count(Category::Minor), 0);
    assert_eq!(summary.critical_issues, 2);
}

#[test]
fn test_in_category_preserves_production_order() {
    let result = result_with(vec![
        make_finding(Category::Minor, Severity::Low, 1),
        make_finding(Category::Critical, Severity::High, 2),
        make_finding(Category::Minor, Severity::Low, 3),
    ]);

    let minor_lines: Vec<usize> = result.in_category(Category::Minor).map(|f| f.line).collect();
    assert_eq!(minor_lines, vec![1, 3]);
}

#[test]
fn test_exceeds_threshold_table() {
    let result = result_with(vec![make_finding(Category::Standards, Severity::Medium, 1)]);

    assert!(!result.exceeds_threshold("high"));
    assert!(result.exceeds_threshold("medium"));
    assert!(result.exceeds_threshold("low"));
    assert!(!result.exceeds_threshold("never"));
    // Unknown values default to "high"
    assert!(!result.exceeds_threshold("bogus"));
}

#[test]
fn test_exemplary_never_counts_against_threshold() {
    let result = result_with(vec![make_finding(Category::Exemplary, Severity::Info, 1)]);
    assert!(!result.exceeds_threshold("low"));
}

#[test]
fn test_failed_result() {
    let result = ReviewResult::failed("boom");
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("boom"));
    assert!(result.findings.is_empty());
    assert_eq!(result.summary, ReviewSummary::default());
}

#[test]
fn test_category_tie_break_order() {
    let mut categories = vec![
        Category::Exemplary,
        Category::Standards,
        Category::Critical,
        Category::Performance,
        Category::Minor,
    ];
    categories.sort();
    assert_eq!(categories, Category::ALL.to_vec());
}
