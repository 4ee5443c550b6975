pub mod types;
pub use types::*;


use crate::utils::line_utils::{
    closes_fence, fence_marker, indent_width, is_blank, is_blockquote_start, is_frontmatter_delimiter,
    is_frontmatter_end, is_heading, is_horizontal_rule, is_math_delimiter,
};
use crate::utils::list_utils::is_list_line;
use crate::utils::mkdocs_admonitions::is_admonition_header;
use crate::utils::mkdocs_tabs::is_tab_header;
use crate::utils::split_lines;
use crate::utils::table_utils::{is_separator_line, is_table_line_at};

/// A document split into lines, with every line's mode and role resolved up front.
///
/// Construction is the mode pass of the scan: frontmatter, code fences and math blocks
/// are tracked here so rules only need to look at [`LineInfo::mode`].
pub struct LintContext<'a> {
    content_lines: Vec<&'a str>,
    pub lines: Vec<LineInfo>,
    /// Opening line of a code fence still open at end of document
    pub unclosed_fence: Option<usize>,
    /// Opening line of a `$$` block still open at end of document
    pub unclosed_math: Option<usize>,
}

/// Mode flags carried from one line to the next.
#[derive(Default)]
struct ModeState<'a> {
    in_frontmatter: bool,
    fence: Option<(&'a str, usize)>,
    math_start: Option<usize>,
}

impl<'a> ModeState<'a> {
    /// Advance over one line, returning its mode and any delimiter role it plays.
    fn advance(&mut self, index: usize, line: &'a str) -> (LineMode, Option<LineRole>) {
        if self.in_frontmatter {
            if is_frontmatter_delimiter(line) || is_frontmatter_end(line) {
                self.in_frontmatter = false;
                return (LineMode::FrontMatter, Some(LineRole::FrontMatterDelimiter));
            }
            return (LineMode::FrontMatter, None);
        }

        if index == 0 && is_frontmatter_delimiter(line) {
            self.in_frontmatter = true;
            return (LineMode::FrontMatter, Some(LineRole::FrontMatterDelimiter));
        }

        if let Some((marker, _)) = self.fence {
            if closes_fence(line, marker) {
                self.fence = None;
                return (LineMode::CodeFence, Some(LineRole::FenceClose));
            }
            return (LineMode::CodeFence, None);
        }

        if self.math_start.is_some() {
            if is_math_delimiter(line) {
                self.math_start = None;
                return (LineMode::MathBlock, Some(LineRole::MathDelimiter));
            }
            return (LineMode::MathBlock, None);
        }

        if let Some(marker) = fence_marker(line) {
            self.fence = Some((marker, index));
            return (LineMode::CodeFence, Some(LineRole::FenceOpen));
        }

        if is_math_delimiter(line) {
            self.math_start = Some(index);
            return (LineMode::MathBlock, Some(LineRole::MathDelimiter));
        }

        (LineMode::Normal, None)
    }
}

/// Role of a normal-mode line. Earlier checks win.
fn classify_normal_line(line: &str, is_table: bool, is_list: bool) -> LineRole {
    if is_blank(line) {
        LineRole::Blank
    } else if is_admonition_header(line) {
        LineRole::AdmonitionHeader
    } else if is_tab_header(line) {
        LineRole::TabHeader
    } else if is_heading(line) {
        LineRole::Heading
    } else if is_horizontal_rule(line) {
        LineRole::HorizontalRule
    } else if is_blockquote_start(line) {
        LineRole::Blockquote
    } else if is_separator_line(line) {
        LineRole::TableSeparator
    } else if is_table {
        LineRole::TableRow
    } else if is_list {
        LineRole::ListItem
    } else {
        LineRole::Plain
    }
}

impl<'a> LintContext<'a> {
    pub fn new(content: &'a str) -> Self {
        let content_lines = split_lines(content);
        let mut state = ModeState::default();
        let mut lines = Vec::with_capacity(content_lines.len());

        for (i, &line) in content_lines.iter().enumerate() {
            let (mode, delimiter_role) = state.advance(i, line);
            let blank = is_blank(line);
            let is_list = is_list_line(line);
            let is_table = is_table_line_at(&content_lines, i);

            let role = match (mode, delimiter_role) {
                (_, Some(role)) => role,
                (LineMode::Normal, None) => classify_normal_line(line, is_table, is_list),
                (_, None) if blank => LineRole::Blank,
                (_, None) => LineRole::Plain,
            };

            lines.push(LineInfo {
                mode,
                role,
                indent: indent_width(line),
                is_blank: blank,
                is_list,
                is_table,
            });
        }

        let unclosed_fence = state.fence.map(|(_, start)| start);
        let unclosed_math = state.math_start;

        log::trace!(
            "Built line context: {} lines, unclosed fence: {:?}, unclosed math: {:?}",
            lines.len(),
            unclosed_fence,
            unclosed_math
        );

        Self {
            content_lines,
            lines,
            unclosed_fence,
            unclosed_math,
        }
    }

    /// The document's lines, without line terminators.
    pub fn raw_lines(&self) -> &[&'a str] {
        &self.content_lines
    }

    /// Text of line `index`, or the empty string when out of range.
    pub fn line_text(&self, index: usize) -> &'a str {
        self.content_lines.get(index).copied().unwrap_or("")
    }

    pub fn line_info(&self, index: usize) -> Option<&LineInfo> {
        self.lines.get(index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Indices of the lines rules run on.
    pub fn normal_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, info)| info.is_normal())
            .map(|(i, _)| i)
    }

    pub fn role(&self, index: usize) -> Option<LineRole> {
        self.lines.get(index).map(|info| info.role)
    }

    #[inline]
    pub fn has_role(&self, index: usize, role: LineRole) -> bool {
        self.role(index) == Some(role)
    }
}
