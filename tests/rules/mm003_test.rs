use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM003ListMarkerSpace;

fn messages(content: &str) -> Vec<String> {
    let ctx = LintContext::new(content);
    let mut messages: Vec<String> = MM003ListMarkerSpace.check(&ctx).into_iter().map(|d| d.message).collect();
    messages.sort();
    messages
}

#[test]
fn test_mm003_all_three_marker_kinds() {
    assert_eq!(
        messages("-item\n1.item\n\n- [x]item"),
        vec![
            "Ordered list markers must be followed by a space.",
            "Task list checkboxes must be followed by a space.",
            "Unordered list markers must be followed by a space.",
        ]
    );
}

#[test]
fn test_mm003_well_formed_items() {
    assert!(messages("- item\n1. item\n- [ ] todo\n- [X] Done\n* star\n+ plus").is_empty());
}

#[test]
fn test_mm003_lookalikes_are_not_lists() {
    let cases = [
        "*Italic* text",
        "**file/path_name.py:**",
        "**file/path_name.py** and **another/file/path_name.html**\nin a single paragraph.",
        "*[UML]: Unified Modeling Language",
        "*[HTML]: Hyper Text Markup Language\n*[CSS]: Cascading Style Sheets",
        "--8<-- \"snippet.md:section_1\"",
        "--8<-- 'snippet.md:section_2'",
        "    --8<-- \"snippet.md\"",
        "---",
        "| Item |\n| --- |\n| -item |",
    ];
    for content in cases {
        assert!(messages(content).is_empty(), "unexpected diagnostic for {content:?}");
    }
}

#[test]
fn test_mm003_frontmatter_is_skipped() {
    assert!(messages("---\n-item\n```\n---").is_empty());
    assert!(messages("---\n-item\n...").is_empty());
}

#[test]
fn test_mm003_reports_whole_line() {
    let ctx = LintContext::new("text\n\n-item");
    let result = MM003ListMarkerSpace.check(&ctx);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 2);
    assert_eq!((result[0].start_char, result[0].end_char), (0, 5));
}
