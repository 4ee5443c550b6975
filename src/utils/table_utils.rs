//! Pipe-table classification.
//!
//! A table line is either a separator (`| --- | :-: |`) or a row containing pipes.
//! Rows with a single pipe only count when a separator sits next to them, which keeps
//! prose like `a | b` from being treated as a table.

use crate::utils::line_utils::{next_non_blank, prev_non_blank};
use crate::utils::regex_cache::{SPACED_PIPE, TABLE_SEPARATOR_CELL};

#[inline]
fn pipe_count(line: &str) -> usize {
    line.bytes().filter(|&b| b == b'|').count()
}

/// Strip one leading and one trailing pipe from the trimmed line.
fn inner_cells(line: &str) -> &str {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    trimmed.strip_suffix('|').unwrap_or(trimmed)
}

/// Separator row: every cell is `-` runs with optional alignment colons.
///
/// Single-column separators (`| --- |`) qualify as long as a pipe is present.
pub fn is_separator_line(line: &str) -> bool {
    if pipe_count(line) == 0 {
        return false;
    }
    inner_cells(line)
        .split('|')
        .all(|cell| TABLE_SEPARATOR_CELL.is_match(cell.trim()))
}

/// Row line: contains at least one pipe, laid out like a table row.
pub fn is_row_line(line: &str) -> bool {
    let pipes = pipe_count(line);
    if pipes == 0 {
        return false;
    }

    let trimmed = line.trim();
    if trimmed.starts_with('|') || trimmed.ends_with('|') {
        return pipes >= 2;
    }

    if pipes == 1 {
        return SPACED_PIPE.is_match(line);
    }

    true
}

/// Whether `lines[index]` participates in a table.
pub fn is_table_line_at(lines: &[&str], index: usize) -> bool {
    let Some(line) = lines.get(index) else {
        return false;
    };

    if is_separator_line(line) {
        return true;
    }

    if !is_row_line(line) {
        return false;
    }

    if pipe_count(line) >= 2 {
        return true;
    }

    let neighbor_is_separator = |i: Option<usize>| i.is_some_and(|i| is_separator_line(lines[i]));
    neighbor_is_separator(prev_non_blank(lines, index)) || neighbor_is_separator(next_non_blank(lines, index + 1))
}

/// Number of cells after stripping one leading and one trailing pipe.
pub fn count_columns(line: &str) -> usize {
    inner_cells(line).split('|').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_lines() {
        assert!(is_separator_line("| --- | --- |"));
        assert!(is_separator_line("|:---|---:|:-:|"));
        assert!(is_separator_line("--- | ---"));
        assert!(is_separator_line("| --- |"));
        assert!(!is_separator_line("---"));
        assert!(!is_separator_line("| -item |"));
        assert!(!is_separator_line("| A | B |"));
        assert!(!is_separator_line("|  |"));
    }

    #[test]
    fn test_row_lines() {
        assert!(is_row_line("| A | B |"));
        assert!(is_row_line("A | B | C"));
        assert!(is_row_line("A | B"));
        assert!(!is_row_line("A|B"));
        assert!(!is_row_line("| A"));
        assert!(!is_row_line("no pipes"));
    }

    #[test]
    fn test_single_pipe_row_needs_adjacent_separator() {
        let lines = ["A | B", "--- | ---", "1 | 2"];
        assert!(is_table_line_at(&lines, 0));
        assert!(is_table_line_at(&lines, 2));

        let prose = ["this | that", "", "more prose"];
        assert!(!is_table_line_at(&prose, 0));
    }

    #[test]
    fn test_count_columns() {
        assert_eq!(count_columns("| A | B |"), 2);
        assert_eq!(count_columns("A | B | C"), 3);
        assert_eq!(count_columns("| --- |"), 1);
        assert_eq!(count_columns("| A | B"), 2);
    }
}
