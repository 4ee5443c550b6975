use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM008UnclosedCodeFence;

fn check(content: &str) -> Vec<mmlint_lib::Diagnostic> {
    let ctx = LintContext::new(content);
    MM008UnclosedCodeFence.check(&ctx)
}

#[test]
fn test_mm008_unclosed_fences() {
    for content in ["```\ncode", "~~~\ncode", "````\ncode\n```", "text\n\n```python\nprint()\n"] {
        let result = check(content);
        assert_eq!(result.len(), 1, "expected one diagnostic for {content:?}");
        assert_eq!(result[0].message, "Code fence must be closed.");
    }
}

#[test]
fn test_mm008_anchored_at_opening_fence() {
    let result = check("# Title\n\n  ```rust\nfn main() {}\n");
    assert_eq!(result[0].line, 2);
    assert_eq!((result[0].start_char, result[0].end_char), (0, 9));
}

#[test]
fn test_mm008_closed_fences() {
    assert!(check("```\n-item\n```").is_empty());
    assert!(check("~~~\n```\n~~~").is_empty());
    assert!(check("````\n```\n````").is_empty());
}
