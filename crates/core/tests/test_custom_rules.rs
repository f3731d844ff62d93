use patchlint_core::{Category, CustomRule, PatchlintConfig, RuleSet, Severity};

fn rule(pattern: &str, message: &str) -> CustomRule {
    CustomRule {
        id: None,
        pattern: pattern.to_string(),
        message: message.to_string(),
        category: "standards".to_string(),
        severity: "medium".to_string(),
        paths: Vec::new(),
        suggestion: None,
    }
}

fn config_with_rules(rules: Vec<CustomRule>) -> PatchlintConfig {
    PatchlintConfig {
        rules,
        ..Default::default()
    }
}

#[test]
fn test_custom_rule_matches() {
    let mut custom = rule(r"var_dump\(", "Remove debug output");
    custom.id = Some("no-var-dump".to_string());
    custom.category = "minor".to_string();
    custom.severity = "low".to_string();
    custom.suggestion = Some("Use a logger instead.".to_string());

    let rules = RuleSet::from_config(&config_with_rules(vec![custom]));
    let findings = rules.scan_line("debug.php", 4, "var_dump($ticket);");

    let hit = findings
        .iter()
        .find(|f| f.description == "Remove debug output")
        .expect("custom rule should fire");
    assert_eq!(hit.category, Category::Minor);
    assert_eq!(hit.severity, Severity::Low);
    assert_eq!(hit.suggestion.as_deref(), Some("Use a logger instead."));
}

#[test]
fn test_custom_rule_glob_scoping() {
    let mut custom = rule("TODO", "Leftover TODO marker");
    custom.paths = vec!["*.php".to_string()];

    let rules = RuleSet::from_config(&config_with_rules(vec![custom]));

    let php = rules.scan_line("notes.php", 1, "// TODO clean up");
    assert!(php.iter().any(|f| f.description == "Leftover TODO marker"));

    let js = rules.scan_line("notes.js", 1, "// TODO clean up");
    assert!(!js.iter().any(|f| f.description == "Leftover TODO marker"));
}

#[test]
fn test_invalid_regex_skipped() {
    let baseline = RuleSet::from_config(&PatchlintConfig::default()).len();
    let rules = RuleSet::from_config(&config_with_rules(vec![rule("([unclosed", "broken")]));
    assert_eq!(rules.len(), baseline);
}

#[test]
fn test_unknown_category_defaults_to_standards() {
    let mut custom = rule("die\\(", "Avoid die()");
    custom.category = "fatal".to_string();

    let rules = RuleSet::from_config(&config_with_rules(vec![custom]));
    let findings = rules.scan_line("a.php", 1, "die('oops');");
    let hit = findings
        .iter()
        .find(|f| f.description == "Avoid die()")
        .expect("rule should still fire");
    assert_eq!(hit.category, Category::Standards);
}

#[test]
fn test_custom_rules_extend_builtins() {
    let baseline = RuleSet::builtin().len();
    let rules = RuleSet::from_config(&config_with_rules(vec![rule("x", "x")]));
    assert_eq!(rules.len(), baseline + 1);
}
