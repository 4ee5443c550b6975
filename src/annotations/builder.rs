use super::nesting::{AdmonitionBlock, resolve_depths};
use super::{Annotations, LineRange};
use crate::lint_context::{LineMode, LineRole, LintContext};
use crate::utils::line_utils::is_blockquote_continuation;
use crate::utils::mkdocs_admonitions::{AdmonitionKind, find_block_end, parse_header};

/// Accumulates block membership while the scan driver walks the document.
///
/// Call [`AnnotationBuilder::observe`] once per line in order, then
/// [`AnnotationBuilder::finish`].
pub struct AnnotationBuilder<'c, 'a> {
    ctx: &'c LintContext<'a>,
    annotations: Annotations,
    blocks: Vec<AdmonitionBlock>,
    in_blockquote: bool,
    table_run: Vec<usize>,
}

impl<'c, 'a> AnnotationBuilder<'c, 'a> {
    pub fn new(ctx: &'c LintContext<'a>) -> Self {
        Self {
            ctx,
            annotations: Annotations::default(),
            blocks: Vec::new(),
            in_blockquote: false,
            table_run: Vec::new(),
        }
    }

    fn range(&self, index: usize) -> LineRange {
        LineRange::whole_line(index, self.ctx.line_text(index))
    }

    pub fn observe(&mut self, index: usize) {
        let ctx = self.ctx;
        let Some(info) = ctx.line_info(index) else {
            return;
        };

        if info.mode != LineMode::Normal {
            if info.mode == LineMode::CodeFence {
                self.annotations.code_fences.push(self.range(index));
            }
            self.in_blockquote = false;
            self.flush_table();
            return;
        }

        let text = ctx.line_text(index);
        if info.role == LineRole::AdmonitionHeader {
            let kind = parse_header(text).map_or(AdmonitionKind::Default, |header| header.kind());
            let end = find_block_end(ctx.raw_lines(), index);
            self.blocks.push(AdmonitionBlock::new(index, end, kind, info.indent));
        }

        if info.role == LineRole::Blockquote {
            self.in_blockquote = true;
            self.annotations.blockquotes.push(self.range(index));
        } else if self.in_blockquote && is_blockquote_continuation(text) {
            self.annotations.blockquotes.push(self.range(index));
        } else {
            self.in_blockquote = false;
        }

        if info.is_table {
            self.table_run.push(index);
        } else {
            self.flush_table();
        }
    }

    /// Close the current table block, recording its rows.
    fn flush_table(&mut self) {
        if self.table_run.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.table_run);
        let ctx = self.ctx;
        let is_separator = |idx: usize| ctx.has_role(idx, LineRole::TableSeparator);

        let mut first_row_seen = false;
        for (pos, &idx) in run.iter().enumerate() {
            let range = self.range(idx);
            self.annotations.tables.lines.push(range);

            if is_separator(idx) {
                continue;
            }

            let followed_by_separator = run.get(pos + 1).is_some_and(|&next| is_separator(next));
            if followed_by_separator {
                self.annotations.tables.header_rows.push(range);
            }

            self.annotations.table_borders.rows.push(range);
            if !first_row_seen {
                first_row_seen = true;
                self.annotations.table_borders.first_rows.push(range);
            }
        }
    }

    /// Finalize open blocks, resolve admonition depths and expand them into ranges.
    pub fn finish(mut self) -> Annotations {
        self.flush_table();

        let mut blocks = std::mem::take(&mut self.blocks);
        resolve_depths(&mut blocks);

        let last_line = self.ctx.line_count().saturating_sub(1);
        for block in &blocks {
            let ranges: Vec<LineRange> = (block.start_line..=block.end_line.min(last_line))
                .map(|line| self.range(line))
                .collect();
            let Some(category) = self.annotations.admonitions.get_mut(&block.kind) else {
                continue;
            };
            for range in ranges {
                category.background.push(range);
                category.gutter[block.depth].push(range);
            }
        }

        log::trace!(
            "Resolved {} admonition blocks, {} table lines, {} blockquote lines",
            blocks.len(),
            self.annotations.tables.lines.len(),
            self.annotations.blockquotes.len()
        );

        self.annotations
    }
}
