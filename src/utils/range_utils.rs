//! Column conversions between character offsets and editor encodings.

/// Start and end character columns covering the whole line.
#[inline]
pub fn full_line_range(line: &str) -> (usize, usize) {
    (0, line.chars().count())
}

/// A one-character span starting at `column`, clamped to the end of the line.
#[inline]
pub fn single_char_range(line: &str, column: usize) -> (usize, usize) {
    let len = line.chars().count();
    let start = column.min(len);
    (start, (start + 1).min(len))
}

/// Convert a character column into a UTF-16 code unit column.
///
/// Columns past the end of the line clamp to the line's UTF-16 length.
pub fn char_to_utf16_column(line: &str, column: usize) -> u32 {
    let units: usize = line.chars().take(column).map(char::len_utf16).sum();
    u32::try_from(units).unwrap_or(u32::MAX)
}
