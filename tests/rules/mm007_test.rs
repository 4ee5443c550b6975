use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM007BlankLineAfterAdmonitionHeader;

#[test]
fn test_mm007_requires_blank_line_when_enabled() {
    let ctx = LintContext::new("!!! note\n    Content without blank line");
    let result = MM007BlankLineAfterAdmonitionHeader::new(true).check(&ctx);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 1);
    assert_eq!(result[0].start_char, 0);
    assert!(result[0].message.contains("blank line"));
}

#[test]
fn test_mm007_off_by_default() {
    let ctx = LintContext::new("!!! note\n    Content without blank line");
    assert!(MM007BlankLineAfterAdmonitionHeader::default().check(&ctx).is_empty());
}

#[test]
fn test_mm007_blank_line_or_list_is_fine() {
    let rule = MM007BlankLineAfterAdmonitionHeader::new(true);
    for content in ["!!! note\n\n    Content", "!!! note\n- item", "!!! note"] {
        let ctx = LintContext::new(content);
        assert!(rule.check(&ctx).is_empty(), "unexpected diagnostic for {content:?}");
    }
}
