//! Nesting depth reconstruction for admonition blocks.
//!
//! Blocks arrive as flat intervals (start line, end line, indentation). Depth is
//! recovered with a single sweep over the blocks sorted by position, keeping a stack
//! of blocks that are still open.

use serde::Serialize;

use crate::utils::mkdocs_admonitions::AdmonitionKind;

/// Number of gutter depth buckets. Deeper nesting shares the last bucket.
pub const MAX_DEPTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmonitionBlock {
    pub start_line: usize,
    pub end_line: usize,
    pub kind: AdmonitionKind,
    pub indent_width: usize,
    /// Resolved by [`resolve_depths`]; 0 until then
    pub depth: usize,
}

impl AdmonitionBlock {
    pub fn new(start_line: usize, end_line: usize, kind: AdmonitionKind, indent_width: usize) -> Self {
        Self {
            start_line,
            end_line: end_line.max(start_line),
            kind,
            indent_width,
            depth: 0,
        }
    }

    #[inline]
    fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}

/// Sort blocks by `(start, end)` and assign each one its clamped nesting depth.
///
/// A block's parent is the most recently opened block that is still open, contains the
/// block's first line, and is indented strictly less.
pub fn resolve_depths(blocks: &mut [AdmonitionBlock]) {
    blocks.sort_by_key(|block| (block.start_line, block.end_line));

    // Indices into `blocks` of blocks that have not closed yet
    let mut open: Vec<usize> = Vec::new();

    for idx in 0..blocks.len() {
        let start = blocks[idx].start_line;
        let indent = blocks[idx].indent_width;

        open.retain(|&o| blocks[o].end_line >= start);

        let parent_depth = open
            .iter()
            .rev()
            .map(|&o| &blocks[o])
            .find(|candidate| candidate.contains_line(start) && candidate.indent_width < indent)
            .map(|parent| parent.depth);

        blocks[idx].depth = parent_depth.map_or(0, |d| (d + 1).min(MAX_DEPTH - 1));
        open.push(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(start: usize, end: usize, indent: usize) -> AdmonitionBlock {
        AdmonitionBlock::new(start, end, AdmonitionKind::Note, indent)
    }

    fn depths(blocks: &[AdmonitionBlock]) -> Vec<usize> {
        blocks.iter().map(|b| b.depth).collect()
    }

    #[test]
    fn test_strictly_nested_blocks() {
        let mut blocks = vec![block(0, 10, 0), block(2, 10, 4), block(4, 10, 8)];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 1, 2]);
    }

    #[test]
    fn test_depth_clamps_at_last_bucket() {
        let mut blocks = vec![
            block(0, 20, 0),
            block(2, 20, 4),
            block(4, 20, 8),
            block(6, 20, 12),
            block(8, 20, 16),
        ];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 1, 2, 3, 3]);
    }

    #[test]
    fn test_siblings_share_depth() {
        let mut blocks = vec![block(0, 2, 0), block(4, 6, 0)];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 0]);
    }

    #[test]
    fn test_closed_block_is_not_a_parent() {
        // The second block starts after the first one ended, even though it is indented
        let mut blocks = vec![block(0, 2, 0), block(5, 7, 4)];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 0]);
    }

    #[test]
    fn test_equal_indent_is_not_nesting() {
        let mut blocks = vec![block(0, 10, 4), block(3, 5, 4)];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 0]);
    }

    #[test]
    fn test_sorting_happens_before_resolution() {
        let mut blocks = vec![block(4, 10, 8), block(0, 10, 0), block(2, 10, 4)];
        resolve_depths(&mut blocks);
        assert_eq!(blocks.iter().map(|b| b.start_line).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(depths(&blocks), vec![0, 1, 2]);
    }

    #[test]
    fn test_nested_sibling_after_inner_block_closes() {
        let mut blocks = vec![block(0, 10, 0), block(1, 3, 4), block(5, 8, 4)];
        resolve_depths(&mut blocks);
        assert_eq!(depths(&blocks), vec![0, 1, 1]);
    }
}
