//! Line-range annotations produced alongside diagnostics.
//!
//! Consumers use these to paint admonition backgrounds, depth-coded gutters, blockquote,
//! table and code fence highlights. Every range covers a whole line.

mod builder;
pub mod nesting;

pub use builder::AnnotationBuilder;
pub use nesting::{AdmonitionBlock, MAX_DEPTH, resolve_depths};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::mkdocs_admonitions::AdmonitionKind;
use crate::utils::range_utils::full_line_range;

/// A whole-line range: `start_char` is always 0 and `end_char` the line's length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub line: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl LineRange {
    pub fn whole_line(line: usize, text: &str) -> Self {
        let (start_char, end_char) = full_line_range(text);
        Self {
            line,
            start_char,
            end_char,
        }
    }
}

/// Ranges for one admonition category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRanges {
    pub background: Vec<LineRange>,
    /// One bucket per nesting depth
    pub gutter: [Vec<LineRange>; MAX_DEPTH],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRanges {
    pub lines: Vec<LineRange>,
    /// Rows directly followed by a separator row
    pub header_rows: Vec<LineRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBorderRanges {
    /// Every non-separator row
    pub rows: Vec<LineRange>,
    /// The first row of each table, which also gets a top border
    pub first_rows: Vec<LineRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    /// Always holds all twelve categories, empty or not
    pub admonitions: BTreeMap<AdmonitionKind, CategoryRanges>,
    pub blockquotes: Vec<LineRange>,
    pub tables: TableRanges,
    pub table_borders: TableBorderRanges,
    pub code_fences: Vec<LineRange>,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            admonitions: AdmonitionKind::ALL
                .iter()
                .map(|&kind| (kind, CategoryRanges::default()))
                .collect(),
            blockquotes: Vec::new(),
            tables: TableRanges::default(),
            table_borders: TableBorderRanges::default(),
            code_fences: Vec::new(),
        }
    }
}

impl Annotations {
    pub fn category(&self, kind: AdmonitionKind) -> Option<&CategoryRanges> {
        self.admonitions.get(&kind)
    }

    /// True when no range of any kind was recorded.
    pub fn is_empty(&self) -> bool {
        self.admonitions
            .values()
            .all(|c| c.background.is_empty() && c.gutter.iter().all(Vec::is_empty))
            && self.blockquotes.is_empty()
            && self.tables.lines.is_empty()
            && self.table_borders.rows.is_empty()
            && self.code_fences.is_empty()
    }

    /// Visit every recorded range.
    pub fn for_each_range_mut(&mut self, mut f: impl FnMut(&mut LineRange)) {
        for category in self.admonitions.values_mut() {
            category.background.iter_mut().for_each(&mut f);
            category.gutter.iter_mut().flatten().for_each(&mut f);
        }
        self.blockquotes.iter_mut().for_each(&mut f);
        self.tables.lines.iter_mut().for_each(&mut f);
        self.tables.header_rows.iter_mut().for_each(&mut f);
        self.table_borders.rows.iter_mut().for_each(&mut f);
        self.table_borders.first_rows.iter_mut().for_each(&mut f);
        self.code_fences.iter_mut().for_each(&mut f);
    }
}
