use patchlint_core::rules::standards::{InputSanitization, OutputEscaping, TextDomain};
use patchlint_core::{Detector, Severity};

fn text_domain() -> TextDomain {
    TextDomain::new("multi-entity-ticket-system".to_string())
}

#[test]
fn test_text_domain_missing() {
    let detection = text_domain()
        .detect("echo esc_html( __( 'Hello', 'wrong-domain' ) );")
        .expect("should detect");
    assert_eq!(detection.severity, Severity::Medium);
    assert_eq!(detection.description, "Missing or incorrect text domain");
    assert!(detection.details.contains("multi-entity-ticket-system"));
}

#[test]
fn test_text_domain_present() {
    assert!(text_domain()
        .detect("__( 'Hello', 'multi-entity-ticket-system' )")
        .is_none());
}

#[test]
fn test_text_domain_covers_echo_wrapper() {
    assert!(text_domain().detect("_e( 'Hello', 'other' );").is_some());
    assert!(text_domain().detect("$x = 'no translation call';").is_none());
}

#[test]
fn test_text_domain_configurable() {
    let detector = TextDomain::new("my-plugin".to_string());
    assert!(detector.detect("__( 'Hi', 'my-plugin' )").is_none());
    assert!(detector
        .detect("__( 'Hi', 'multi-entity-ticket-system' )")
        .is_some());
}

#[test]
fn test_output_escaping_missing() {
    let detection = OutputEscaping
        .detect("echo $user_name;")
        .expect("should detect");
    assert_eq!(detection.description, "Missing output escaping");
}

#[test]
fn test_output_escaping_present() {
    assert!(OutputEscaping.detect("echo esc_html( $user_name );").is_none());
    assert!(OutputEscaping.detect("echo esc_attr( $class );").is_none());
}

#[test]
fn test_output_escaping_requires_variable() {
    assert!(OutputEscaping.detect("echo 'static text';").is_none());
}

#[test]
fn test_input_sanitization_missing() {
    let detection = InputSanitization
        .detect("$title = $_POST['title'];")
        .expect("should detect");
    assert_eq!(detection.description, "Missing input sanitization");
}

#[test]
fn test_input_sanitization_present() {
    assert!(InputSanitization
        .detect("$title = sanitize_text_field( $_POST['title'] );")
        .is_none());
    assert!(InputSanitization
        .detect("$id = validate_id( $_GET['id'] );")
        .is_none());
}
