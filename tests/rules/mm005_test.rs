use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::{Rule, Severity};
use mmlint_lib::rules::MM005BlankLineBeforeList;

fn check(content: &str, check_structural: bool) -> Vec<mmlint_lib::Diagnostic> {
    let ctx = LintContext::new(content);
    MM005BlankLineBeforeList::new(check_structural).check(&ctx)
}

#[test]
fn test_mm005_paragraph_then_list_always_errors() {
    for flag in [false, true] {
        let result = check("Paragraph line\n- list item", flag);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].severity, Severity::Error);
        assert!(result[0].message.contains("parsing error"));
        assert_eq!(result[0].line, 1);
    }
}

#[test]
fn test_mm005_allowed_predecessors() {
    let cases = [
        "- Item\n- Another item",
        "> Quote\n- list item",
        "!!! note\n- list item",
        "Paragraph\n\n- list item",
        "=== \"Tab\"\n- item",
    ];
    for content in cases {
        assert!(check(content, true).is_empty(), "unexpected diagnostic for {content:?}");
    }
}

#[test]
fn test_mm005_structural_predecessors_are_opt_in() {
    let cases = ["# Heading\n- item", "***\n- item", "```\ncode\n```\n- item"];
    for content in cases {
        assert!(check(content, false).is_empty(), "off by default for {content:?}");

        let result = check(content, true);
        assert_eq!(result.len(), 1, "expected a warning for {content:?}");
        assert_eq!(result[0].severity, Severity::Warning);
        assert_eq!(result[0].message, "List items should be preceded by a blank line.");
    }
}

#[test]
fn test_mm005_only_looks_at_the_line_immediately_above() {
    // The blank line is the signal; what came before it does not matter
    assert!(check("Paragraph\n\n- item\nmore text\n\n- item", false).is_empty());
}
