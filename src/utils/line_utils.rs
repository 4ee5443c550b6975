//! Line-level helpers shared by the classifiers and rules.
//!
//! All column values produced here are character (Unicode scalar) offsets, not byte
//! offsets. Protocol-specific encodings are derived at the edges.

use crate::utils::regex_cache::{
    ATX_HEADING, BLOCKQUOTE_CONTINUATION_INDENT, BLOCKQUOTE_START, CODE_FENCE, EMPHASIS_AT_LINE_START,
    FRONTMATTER_DELIMITER, FRONTMATTER_END, HORIZONTAL_RULE, MATH_DELIMITER,
};

/// Width contributed by a tab when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Split a document into lines on `\n`, dropping a trailing `\r` from each line.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so the
/// line count matches what an editor shows.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A line is blank when it holds nothing but whitespace.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// The run of spaces and tabs at the start of the line.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

/// Indentation width of the line: spaces count 1, tabs count [`TAB_WIDTH`].
pub fn indent_width(line: &str) -> usize {
    leading_whitespace(line)
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Character index of the first non-whitespace character, or the line length if there is none.
pub fn first_non_whitespace_column(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Character index of the first occurrence of `needle`, if any.
pub fn char_index_of(line: &str, needle: &str) -> Option<usize> {
    line.find(needle).map(|byte_idx| line[..byte_idx].chars().count())
}

/// Find the nearest non-blank line at or after `start`.
pub fn next_non_blank(lines: &[&str], start: usize) -> Option<usize> {
    (start..lines.len()).find(|&i| !is_blank(lines[i]))
}

/// Find the nearest non-blank line strictly before `index`.
pub fn prev_non_blank(lines: &[&str], index: usize) -> Option<usize> {
    (0..index.min(lines.len())).rev().find(|&i| !is_blank(lines[i]))
}

#[inline]
pub fn is_frontmatter_delimiter(line: &str) -> bool {
    FRONTMATTER_DELIMITER.is_match(line)
}

#[inline]
pub fn is_frontmatter_end(line: &str) -> bool {
    FRONTMATTER_END.is_match(line)
}

/// Returns the marker run (e.g. "```" or "~~~~") when the line opens or closes a code fence.
pub fn fence_marker(line: &str) -> Option<&str> {
    CODE_FENCE.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Whether `line` closes a fence opened with `marker`.
///
/// The closing run must use the same character and be at least as long.
#[inline]
pub fn closes_fence(line: &str, marker: &str) -> bool {
    !marker.is_empty() && line.trim_start().starts_with(marker)
}

#[inline]
pub fn is_math_delimiter(line: &str) -> bool {
    MATH_DELIMITER.is_match(line)
}

#[inline]
pub fn is_horizontal_rule(line: &str) -> bool {
    HORIZONTAL_RULE.is_match(line)
}

/// ATX heading with one to six `#` followed by whitespace.
#[inline]
pub fn is_heading(line: &str) -> bool {
    ATX_HEADING.is_match(line)
}

#[inline]
pub fn is_blockquote_start(line: &str) -> bool {
    BLOCKQUOTE_START.is_match(line)
}

/// Whether a line keeps an already open blockquote run going.
pub fn is_blockquote_continuation(line: &str) -> bool {
    if is_blank(line) {
        return false;
    }
    BLOCKQUOTE_CONTINUATION_INDENT.is_match(line) || crate::utils::list_utils::is_list_line(line)
}

/// Bold or italic text at the start of a line (`**bold**`, `*italic*`, `__x__`, `_x_`).
///
/// These look like malformed list markers to a naive check.
#[inline]
pub fn starts_with_emphasis(line: &str) -> bool {
    EMPHASIS_AT_LINE_START.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_crlf_and_trailing_newline() {
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }

    #[test]
    fn test_indent_width_counts_tabs_as_four() {
        assert_eq!(indent_width("text"), 0);
        assert_eq!(indent_width("    text"), 4);
        assert_eq!(indent_width("\ttext"), 4);
        assert_eq!(indent_width("  \ttext"), 6);
        assert_eq!(leading_whitespace("\t  x"), "\t  ");
    }

    #[test]
    fn test_first_non_whitespace_column() {
        assert_eq!(first_non_whitespace_column("   x"), 3);
        assert_eq!(first_non_whitespace_column("x"), 0);
        assert_eq!(first_non_whitespace_column("   "), 3);
    }

    #[test]
    fn test_char_index_of_uses_characters() {
        assert_eq!(char_index_of("éé===x", "==="), Some(2));
        assert_eq!(char_index_of("abc", "==="), None);
    }

    #[test]
    fn test_neighbor_search_skips_blanks() {
        let lines = ["a", "", "  ", "b"];
        assert_eq!(next_non_blank(&lines, 1), Some(3));
        assert_eq!(prev_non_blank(&lines, 3), Some(0));
        assert_eq!(prev_non_blank(&lines, 0), None);
        assert_eq!(next_non_blank(&lines, 4), None);
    }

    #[test]
    fn test_fence_marker_and_close() {
        assert_eq!(fence_marker("```python"), Some("```"));
        assert_eq!(fence_marker("  ~~~~"), Some("~~~~"));
        assert_eq!(fence_marker("``"), None);
        assert!(closes_fence("````", "```"));
        assert!(!closes_fence("```", "````"));
        assert!(!closes_fence("~~~", "```"));
    }

    #[test]
    fn test_delimiters() {
        assert!(is_frontmatter_delimiter("---"));
        assert!(is_frontmatter_delimiter("  ---  "));
        assert!(!is_frontmatter_delimiter("----"));
        assert!(is_frontmatter_end("..."));
        assert!(is_math_delimiter(" $$ "));
        assert!(!is_math_delimiter("$$x$$"));
    }

    #[test]
    fn test_blockquote_continuation() {
        assert!(is_blockquote_start("> quote"));
        assert!(!is_blockquote_start(">"));
        assert!(is_blockquote_continuation("  continued"));
        assert!(is_blockquote_continuation("\tcontinued"));
        assert!(is_blockquote_continuation("- item"));
        assert!(!is_blockquote_continuation("plain"));
        assert!(!is_blockquote_continuation("   "));
    }

    #[test]
    fn test_starts_with_emphasis() {
        assert!(starts_with_emphasis("**file/path_name.py:**"));
        assert!(starts_with_emphasis("*Italic* text"));
        assert!(starts_with_emphasis("__bold__"));
        assert!(!starts_with_emphasis("*item"));
        assert!(!starts_with_emphasis("* item"));
    }

    #[test]
    fn test_heading_requires_space() {
        assert!(is_heading("# Title"));
        assert!(is_heading("###### Deep"));
        assert!(!is_heading("#hashtag"));
        assert!(!is_heading("####### Too deep"));
    }
}
