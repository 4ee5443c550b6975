//! MkDocs Material content tabs (`=== "Title"`).

use crate::utils::line_utils::char_index_of;
use crate::utils::regex_cache::{QUOTED_TITLE, TAB_HEADER, TAB_HEADER_PREFIX, TAB_MISSING_SPACE};

/// `===` followed by whitespace: the line opens a tab.
#[inline]
pub fn is_tab_header(line: &str) -> bool {
    TAB_HEADER_PREFIX.is_match(line)
}

/// Character column right after the `===` marker, when the marker is glued to the title.
pub fn missing_space_column(line: &str) -> Option<usize> {
    if !TAB_MISSING_SPACE.is_match(line) {
        return None;
    }
    char_index_of(line, "===").map(|col| col + 3)
}

/// The trimmed title of a well-formed tab header.
pub fn tab_title(line: &str) -> Option<&str> {
    TAB_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Whether the title is wrapped in matching single or double quotes.
///
/// A backtracking failure counts as unquoted.
pub fn is_quoted_title(title: &str) -> bool {
    QUOTED_TITLE.is_match(title).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tab_header() {
        assert!(is_tab_header("=== \"Tab\""));
        assert!(is_tab_header("    === 'Tab'"));
        assert!(!is_tab_header("===Tab"));
        assert!(!is_tab_header("==="));
    }

    #[test]
    fn test_missing_space_column() {
        assert_eq!(missing_space_column("===Tab"), Some(3));
        assert_eq!(missing_space_column("  ===\"Tab\""), Some(5));
        assert_eq!(missing_space_column("=== Tab"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(tab_title("=== \"Python\"  "), Some("\"Python\""));
        assert!(is_quoted_title("\"Python\""));
        assert!(is_quoted_title("'C++'"));
        assert!(!is_quoted_title("Python"));
        assert!(!is_quoted_title("\"Python'"));
        assert!(!is_quoted_title("\""));
    }
}
