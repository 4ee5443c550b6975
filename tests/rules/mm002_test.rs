use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM002TabSyntax;

#[test]
fn test_mm002_marker_without_space_and_unquoted_title() {
    let ctx = LintContext::new("===Tab\n=== Tab");
    let result = MM002TabSyntax.check(&ctx);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].line, 0);
    assert_eq!(result[0].message, "Tab marker must be followed by a space.");
    assert_eq!((result[0].start_char, result[0].end_char), (3, 4));
    assert_eq!(result[1].line, 1);
    assert_eq!(result[1].message, "Tab title must be wrapped in matching quotes.");
}

#[test]
fn test_mm002_mismatched_quotes() {
    let ctx = LintContext::new("=== \"Tab'");
    let result = MM002TabSyntax.check(&ctx);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].message, "Tab title must be wrapped in matching quotes.");
}

#[test]
fn test_mm002_quoted_titles_pass() {
    let ctx = LintContext::new("=== \"Python\"\n\n    code\n\n=== 'Single'\n\n    Content\n");
    assert!(MM002TabSyntax.check(&ctx).is_empty());
}
