use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::{Rule, Severity};
use mmlint_lib::rules::MM001AdmonitionSyntax;

fn messages(content: &str) -> Vec<String> {
    let ctx = LintContext::new(content);
    MM001AdmonitionSyntax.check(&ctx).into_iter().map(|d| d.message).collect()
}

#[test]
fn test_mm001_missing_type() {
    assert_eq!(messages("!!! "), vec!["Admonition type is required."]);
}

#[test]
fn test_mm001_invalid_identifier() {
    assert_eq!(
        messages("!!! invalid$type"),
        vec!["Admonition type must be a simple identifier."]
    );
}

#[test]
fn test_mm001_unknown_type_is_a_warning() {
    let ctx = LintContext::new("!!! caution");
    let result = MM001AdmonitionSyntax.check(&ctx);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].severity, Severity::Warning);
    assert_eq!(result[0].message, "Unknown admonition type: \"caution\".");
    assert_eq!(result[0].rule, "MM001");
}

#[test]
fn test_mm001_unclosed_title_quote() {
    assert_eq!(
        messages("!!! note \"Unclosed"),
        vec!["Admonition title has an unclosed quote."]
    );
}

#[test]
fn test_mm001_valid_headers() {
    let content = "!!! note\n\n    Body\n\n??? tip \"Collapsed\"\n\n    Body\n\n???+ warning \"\"\n\n    Body\n\n!!! error inline end\n";
    assert!(messages(content).is_empty());
}

#[test]
fn test_mm001_aliases_are_known() {
    for header in ["!!! failure", "!!! danger", "!!! error", "!!! NOTE", "!!! Quote"] {
        assert!(messages(header).is_empty(), "{header} should be accepted");
    }
}

#[test]
fn test_mm001_ignores_headers_in_code_blocks() {
    assert!(messages("```\n!!! bogus$\n```\n").is_empty());
}
