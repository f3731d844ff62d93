use patchlint_core::rules::performance::{QueryInLoop, StringConcatenation};
use patchlint_core::{Detector, Severity};

#[test]
fn test_query_in_loop_same_line() {
    let line = "foreach ( $ids as $id ) { $wpdb->query( $sql ); }";
    let detection = QueryInLoop.detect(line).expect("should detect");
    assert_eq!(detection.severity, Severity::High);
    assert_eq!(detection.description, "Database query in loop");
}

#[test]
fn test_query_in_loop_covers_all_query_calls() {
    assert!(QueryInLoop
        .detect("for ( $i = 0; $i < $n; $i++ ) { $row = $wpdb->get_row( $q ); }")
        .is_some());
    assert!(QueryInLoop
        .detect("while ( $more ) { $posts = get_posts( $args ); }")
        .is_some());
}

// Same-line heuristic: a query on its own line is not reported even when it
// sits inside a loop body spanning multiple lines.
#[test]
fn test_query_without_loop_keyword_passes() {
    assert!(QueryInLoop.detect("$wpdb->query( $sql );").is_none());
    assert!(QueryInLoop.detect("foreach ( $ids as $id ) {").is_none());
}

#[test]
fn test_concatenation_over_threshold() {
    let line = "$s = $a . $b . $c . $d . $e . $f . $g . $h . $i . $j . $k . $l;";
    assert_eq!(line.matches('.').count(), 11);
    let detection = StringConcatenation.detect(line).expect("should detect");
    assert_eq!(detection.description, "Inefficient string concatenation");
}

#[test]
fn test_concatenation_at_threshold_passes() {
    let line = "$s = $a . $b . $c . $d . $e . $f . $g . $h . $i . $j . $k;";
    assert_eq!(line.matches('.').count(), 10);
    assert!(StringConcatenation.detect(line).is_none());
}

// Every dot counts, not just concatenation operators.
#[test]
fn test_concatenation_counts_any_dot() {
    let line = "$v = '1.2.3.4.5.6.7.8.9.10.11.12';";
    assert!(StringConcatenation.detect(line).is_some());
}
