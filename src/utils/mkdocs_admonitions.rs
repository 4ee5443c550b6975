//! MkDocs Material admonition headers and block extents.
//!
//! Admonitions open with `!!!` (static), `???` (collapsible) or `???+` (collapsible,
//! initially open), followed by a type keyword and an optional quoted title:
//!
//! ```text
//! !!! note "Title"
//!     Body content indented by four spaces or a tab.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::line_utils::{is_blank, leading_whitespace};
use crate::utils::regex_cache::{ADMONITION_HEADER, ADMONITION_TYPE, QUOTE_AFTER_SPACE};

/// Normalized admonition category, used to group annotation ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmonitionKind {
    Note,
    Abstract,
    Info,
    Tip,
    Success,
    Question,
    Warning,
    Danger,
    Bug,
    Example,
    Quote,
    Default,
}

impl AdmonitionKind {
    pub const ALL: [AdmonitionKind; 12] = [
        AdmonitionKind::Note,
        AdmonitionKind::Abstract,
        AdmonitionKind::Info,
        AdmonitionKind::Tip,
        AdmonitionKind::Success,
        AdmonitionKind::Question,
        AdmonitionKind::Warning,
        AdmonitionKind::Danger,
        AdmonitionKind::Bug,
        AdmonitionKind::Example,
        AdmonitionKind::Quote,
        AdmonitionKind::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdmonitionKind::Note => "note",
            AdmonitionKind::Abstract => "abstract",
            AdmonitionKind::Info => "info",
            AdmonitionKind::Tip => "tip",
            AdmonitionKind::Success => "success",
            AdmonitionKind::Question => "question",
            AdmonitionKind::Warning => "warning",
            AdmonitionKind::Danger => "danger",
            AdmonitionKind::Bug => "bug",
            AdmonitionKind::Example => "example",
            AdmonitionKind::Quote => "quote",
            AdmonitionKind::Default => "default",
        }
    }

    /// Classify a raw type token. Unrecognized tokens fall back to [`AdmonitionKind::Default`].
    pub fn from_type(type_token: &str) -> Self {
        lookup_type(type_token).unwrap_or(AdmonitionKind::Default)
    }
}

impl fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized type keywords (lowercase) and their category.
static ADMONITION_TYPES: phf::Map<&'static str, AdmonitionKind> = phf::phf_map! {
    "note" => AdmonitionKind::Note,
    "abstract" => AdmonitionKind::Abstract,
    "info" => AdmonitionKind::Info,
    "tip" => AdmonitionKind::Tip,
    "success" => AdmonitionKind::Success,
    "question" => AdmonitionKind::Question,
    "warning" => AdmonitionKind::Warning,
    "failure" => AdmonitionKind::Danger,
    "danger" => AdmonitionKind::Danger,
    "error" => AdmonitionKind::Danger,
    "bug" => AdmonitionKind::Bug,
    "example" => AdmonitionKind::Example,
    "quote" => AdmonitionKind::Quote,
};

fn lookup_type(type_token: &str) -> Option<AdmonitionKind> {
    ADMONITION_TYPES.get(type_token.to_ascii_lowercase().as_str()).copied()
}

/// Whether the type keyword is part of the recognized vocabulary (case-insensitive).
pub fn is_known_type(type_token: &str) -> bool {
    lookup_type(type_token).is_some()
}

/// Whether the type token is a simple identifier: a letter followed by word characters or dashes.
pub fn is_simple_identifier(type_token: &str) -> bool {
    ADMONITION_TYPE.is_match(type_token)
}

/// A matched admonition header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmonitionHeader<'a> {
    /// Leading spaces and tabs before the marker
    pub indent: &'a str,
    /// `!!!`, `???` or `???+`
    pub marker: &'a str,
    /// Everything after the marker, trimmed
    pub rest: &'a str,
}

impl<'a> AdmonitionHeader<'a> {
    /// The type keyword: the first whitespace-separated token of the rest. Empty if omitted.
    pub fn type_token(&self) -> &'a str {
        self.rest.split_whitespace().next().unwrap_or("")
    }

    pub fn kind(&self) -> AdmonitionKind {
        AdmonitionKind::from_type(self.type_token())
    }
}

/// Parse an admonition header. A bare marker counts as a header with an empty rest.
pub fn parse_header(line: &str) -> Option<AdmonitionHeader<'_>> {
    let caps = ADMONITION_HEADER.captures(line)?;
    Some(AdmonitionHeader {
        indent: caps.get(1).map_or("", |m| m.as_str()),
        marker: caps.get(2).map_or("", |m| m.as_str()),
        rest: caps.get(3).map_or("", |m| m.as_str().trim()),
    })
}

#[inline]
pub fn is_admonition_header(line: &str) -> bool {
    ADMONITION_HEADER.is_match(line)
}

/// Returns true when the title text has an odd number of quote characters.
///
/// Only applies once a quote follows whitespace. Double quotes take precedence: if any
/// are present, only they are counted.
pub fn has_unclosed_quote(text: &str) -> bool {
    if !QUOTE_AFTER_SPACE.is_match(text) {
        return false;
    }

    let double = text.matches('"').count();
    if double > 0 {
        return double % 2 == 1;
    }

    text.matches('\'').count() % 2 == 1
}

/// Whether `line` starts with the header's own indentation followed by a tab or four spaces.
pub fn has_required_indentation(line: &str, header_indent: &str) -> bool {
    line.strip_prefix(header_indent)
        .is_some_and(|rest| rest.starts_with('\t') || rest.starts_with("    "))
}

/// Last line of the admonition opened at `start`.
///
/// Extends through following lines that carry the required indentation, skipping blank
/// lines; stops at the first non-blank line without it. Trailing blanks are not included.
pub fn find_block_end(lines: &[&str], start: usize) -> usize {
    let Some(header) = lines.get(start) else {
        return start;
    };
    let header_indent = leading_whitespace(header);

    let mut last = start;
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if is_blank(line) {
            continue;
        }
        if !has_required_indentation(line, header_indent) {
            break;
        }
        last = i;
    }
    last
}
