use patchlint_core::rules::exemplary::{ErrorHandling, NonceVerification, SanitizationUsage};
use patchlint_core::{Category, Detector, RuleSet, Severity};

#[test]
fn test_nonce_verification_highlighted() {
    let detection = NonceVerification
        .detect("if ( ! wp_verify_nonce( $nonce, 'save_ticket' ) ) {")
        .expect("should detect");
    assert_eq!(detection.severity, Severity::Info);
    assert_eq!(detection.description, "Good security practice");
    assert!(detection.suggestion.is_none());
}

#[test]
fn test_sanitization_usage_highlighted() {
    assert!(SanitizationUsage
        .detect("$title = sanitize_text_field( $_POST['title'] );")
        .is_some());
    assert!(SanitizationUsage
        .detect("echo esc_html__( 'Saved', 'my-plugin' );")
        .is_some());
    assert!(SanitizationUsage.detect("$x = 1;").is_none());
}

#[test]
fn test_error_handling_requires_both_calls() {
    assert!(ErrorHandling
        .detect("if ( is_wp_error( $result ) ) { wp_die( $result->get_error_message() ); }")
        .is_some());
    assert!(ErrorHandling.detect("if ( is_wp_error( $result ) ) {").is_none());
    assert!(ErrorHandling.detect("wp_die( 'unreachable' );").is_none());
}

// Categories are additive: one line can earn praise and an issue at once.
#[test]
fn test_exemplary_and_performance_on_one_line() {
    let rules = RuleSet::builtin();
    let line = "if ( wp_verify_nonce( $n ) ) { foreach ( $ids as $id ) { $wpdb->query( $q ); } }";
    let findings = rules.scan_line("a.php", 7, line);

    let categories: Vec<Category> = findings.iter().map(|f| f.category).collect();
    assert!(categories.contains(&Category::Exemplary));
    assert!(categories.contains(&Category::Performance));
}
