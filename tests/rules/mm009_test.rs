use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM009UnclosedMathBlock;

fn check(content: &str) -> Vec<mmlint_lib::Diagnostic> {
    let ctx = LintContext::new(content);
    MM009UnclosedMathBlock.check(&ctx)
}

#[test]
fn test_mm009_unclosed_math_block() {
    let result = check("$$\nmath");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 0);
    assert_eq!(result[0].message, "Math block must be closed with $$.");
}

#[test]
fn test_mm009_closed_and_inline_math() {
    assert!(check("$$\nE = mc^2\n$$").is_empty());
    assert!(check("Inline $E=mc^2$\n\n$$\nE=mc^2\n$$").is_empty());
}

#[test]
fn test_mm009_math_inside_fence_is_code() {
    assert!(check("```\n$$\n```").is_empty());
}
