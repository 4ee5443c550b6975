use crate::utils::regex_cache::{
    ABBREVIATION_DEFINITION, LIST_ITEM, ORDERED_MARKER_NO_SPACE, SNIPPET_INCLUDE, TASK_CHECKBOX_NO_SPACE,
    UNORDERED_MARKER_NO_SPACE,
};

/// A list marker that is glued to the text that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSpacingIssue {
    Unordered,
    Ordered,
    TaskCheckbox,
}

impl MarkerSpacingIssue {
    pub fn message(self) -> &'static str {
        match self {
            MarkerSpacingIssue::Unordered => "Unordered list markers must be followed by a space.",
            MarkerSpacingIssue::Ordered => "Ordered list markers must be followed by a space.",
            MarkerSpacingIssue::TaskCheckbox => "Task list checkboxes must be followed by a space.",
        }
    }
}

/// `*[HTML]: Hyper Text Markup Language`
#[inline]
pub fn is_abbreviation_definition(line: &str) -> bool {
    ABBREVIATION_DEFINITION.is_match(line)
}

/// `--8<-- "path/to/file.md"`
#[inline]
pub fn is_snippet_include(line: &str) -> bool {
    SNIPPET_INCLUDE.is_match(line)
}

/// Whether the line is a list item with a properly spaced marker.
///
/// Abbreviation definitions and snippet includes are never list items, even though
/// they start with list-marker characters.
pub fn is_list_line(line: &str) -> bool {
    if is_abbreviation_definition(line) || is_snippet_include(line) {
        return false;
    }
    LIST_ITEM.is_match(line)
}

/// Collect every marker-spacing problem on the line. The three checks are independent.
pub fn marker_spacing_issues(line: &str) -> Vec<MarkerSpacingIssue> {
    let mut issues = Vec::new();
    if UNORDERED_MARKER_NO_SPACE.is_match(line) {
        issues.push(MarkerSpacingIssue::Unordered);
    }
    if ORDERED_MARKER_NO_SPACE.is_match(line) {
        issues.push(MarkerSpacingIssue::Ordered);
    }
    if TASK_CHECKBOX_NO_SPACE.is_match(line) {
        issues.push(MarkerSpacingIssue::TaskCheckbox);
    }
    issues
}
