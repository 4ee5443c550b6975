use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM006IndentedContent;

fn check(content: &str) -> Vec<mmlint_lib::Diagnostic> {
    let ctx = LintContext::new(content);
    MM006IndentedContent::default().check(&ctx)
}

#[test]
fn test_mm006_under_indented_admonition_body() {
    let result = check("!!! note\n\n  Two spaces");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 2);
    assert_eq!((result[0].start_char, result[0].end_char), (2, 3));
    assert_eq!(result[0].message, "Admonition content must be indented by 4 spaces or a tab.");
}

#[test]
fn test_mm006_under_indented_tab_body() {
    let result = check("=== \"Tab\"\n\n   Three spaces");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].message, "Tab content must be indented by 4 spaces or a tab.");
}

#[test]
fn test_mm006_nested_header_indent_is_relative() {
    assert!(check("!!! note\n\n    !!! tip\n\n        Nested body").is_empty());

    let result = check("!!! note\n\n    !!! tip\n\n      Six spaces");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 4);
}

#[test]
fn test_mm006_accepts_tabs_and_spaces() {
    assert!(check("!!! error\n\n    Indented content").is_empty());
    assert!(check("??? tip\n\tTabbed content").is_empty());
    assert!(check("=== 'Single'\n    Content").is_empty());
}

#[test]
fn test_mm006_flush_left_content_is_outside_the_block() {
    assert!(check("!!! note\n\nNot indented").is_empty());
    assert!(check("=== \"Tab\"\nNot indented either").is_empty());
}

#[test]
fn test_mm006_skips() {
    // Consecutive tabs, trailing headers and block-level followers
    assert!(check("=== \"One\"\n  === \"Two\"").is_empty());
    assert!(check("!!! note").is_empty());
    assert!(check("!!! note\n\n  # Heading").is_empty());
    assert!(check("!!! note\n  - item").is_empty());
}

#[test]
fn test_mm006_disabled() {
    let ctx = LintContext::new("!!! note\n  Body");
    assert!(MM006IndentedContent::new(false).check(&ctx).is_empty());
}
