use mmlint_lib::lint_context::LintContext;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::MM004TableHeaderSeparator;

fn check(content: &str) -> Vec<mmlint_lib::Diagnostic> {
    let ctx = LintContext::new(content);
    MM004TableHeaderSeparator.check(&ctx)
}

#[test]
fn test_mm004_missing_separator() {
    let result = check("| A |\nnot a separator");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 0);
    assert_eq!(result[0].message, "Table header must be followed by a separator row.");
}

#[test]
fn test_mm004_column_count_mismatch_on_separator_line() {
    let result = check("| A | B |\n| --- | --- | --- |");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, 1);
    assert_eq!(result[0].message, "Table separator column count must match the header.");
}

#[test]
fn test_mm004_valid_tables() {
    let cases = [
        "A | B | C\n--- | --- | ---\n1 | 2 | 3",
        "| A | B |\n--- | ---\n1 | 2",
        "\n| A | B |\n| --- | --- |\n| 1 | 2 |",
        "| Item |\n| --- |\n| -item |",
        "| Left | Right |\n|:-----|------:|\n| a | b |\n\n| Second | Table |\n| --- | --- |",
    ];
    for content in cases {
        assert!(check(content).is_empty(), "unexpected diagnostic for {content:?}");
    }
}

#[test]
fn test_mm004_body_rows_are_not_rechecked() {
    // A body row with the wrong cell count is still rendered by Python-Markdown
    assert!(check("| A | B |\n| --- | --- |\n| 1 | 2 | 3 |\n| 4 |").is_empty());
}

#[test]
fn test_mm004_header_at_end_of_document() {
    assert!(check("text\n\n| A | B |\n").is_empty());
}
