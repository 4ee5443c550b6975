//!
//! Cached Regex Patterns for MkDocs Material Line Classification
//!
//! This module provides a centralized collection of pre-compiled, cached regex patterns
//! for the structural constructs the scanner recognizes (frontmatter delimiters, code
//! fences, math blocks, admonition and tab headers, list markers, blockquotes, horizontal
//! rules and headings).
//!
//! # Performance
//!
//! All regexes are compiled once on first use through `LazyLock`, avoiding repeated
//! compilation across scans. Classifiers and rules should use these shared patterns
//! instead of compiling new regexes.
//!
//! # Usage
//!
//! - Use the provided statics for the fixed patterns.
//! - Patterns that need backreferences are `fancy_regex` statics.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// DOCUMENT-LEVEL DELIMITERS
// =============================================================================

/// `---` alone on a line (frontmatter open/close, also a horizontal rule)
pub static FRONTMATTER_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*---\s*$").unwrap());
/// `...` alone on a line (YAML document end, closes frontmatter)
pub static FRONTMATTER_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\.\.\.\s*$").unwrap());
/// Opening/closing code fence, capturing the marker run
pub static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(`{3,}|~{3,})").unwrap());
/// `$$` alone on a line
pub static MATH_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\$\$\s*$").unwrap());

// =============================================================================
// MKDOCS MATERIAL BLOCK HEADERS
// =============================================================================

/// Admonition header: indentation, marker (`!!!`, `???+`, `???`) and the rest of the line
pub static ADMONITION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(!!!|\?\?\?\+|\?\?\?)\s*(.*)$").unwrap());
/// A simple admonition type identifier (ASCII word characters and dashes)
pub static ADMONITION_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());
/// A quote character preceded by whitespace, the start of a quoted title
pub static QUOTE_AFTER_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\s["']"#).unwrap());

/// `===` followed directly by a non-space character
pub static TAB_MISSING_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*===(\S)").unwrap());
/// Well-formed tab header, capturing the title
pub static TAB_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*===\s+(.+)$").unwrap());
/// Tab header prefix, used to decide block membership
pub static TAB_HEADER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*===\s+").unwrap());
/// Title wrapped in matching quotes (needs a backreference)
pub static QUOTED_TITLE: LazyLock<FancyRegex> = LazyLock::new(|| FancyRegex::new(r#"^(['"]).*\1$"#).unwrap());

// =============================================================================
// LISTS
// =============================================================================

/// Any list item with a properly spaced marker (unordered, ordered or task)
pub static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(?:[-+*]|\d+\.)\s+").unwrap());
pub static UNORDERED_MARKER_NO_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-+*]\S").unwrap());
pub static ORDERED_MARKER_NO_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\S").unwrap());
pub static TASK_CHECKBOX_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-+*]\s+\[[ xX]\]\S").unwrap());
/// Abbreviation definition: `*[HTML]: Hyper Text Markup Language`
pub static ABBREVIATION_DEFINITION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\[[^\]]+\]:").unwrap());
/// Snippet include: `--8<-- "file.md"` or `--8<-- 'file.md'`
pub static SNIPPET_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*--8<--\s+(?:"[^"]*"|'[^']*')\s*$"#).unwrap());

// =============================================================================
// INLINE AND LEAF BLOCKS
// =============================================================================

pub static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$").unwrap());
pub static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());
pub static BLOCKQUOTE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>\s*\S").unwrap());
pub static BLOCKQUOTE_CONTINUATION_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?: {2,}|\t)").unwrap());
/// Bold or italic span opening the line: `**x**`, `__x__`, `*x*`, `_x_`
pub static EMPHASIS_AT_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\*\*[^*]+\*\*|__[^_]+__|\*[^*\s][^*]*\*|_[^_\s][^_]*_)").unwrap()
});

// =============================================================================
// TABLES
// =============================================================================

/// A single separator cell: `---`, `:---`, `---:`, `:---:`
pub static TABLE_SEPARATOR_CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:?-+:?$").unwrap());
/// A lone pipe surrounded by whitespace, the minimal pipe-table row
pub static SPACED_PIPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\|\s").unwrap());
