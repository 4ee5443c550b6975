//!
//! Rule MM006: Indented admonition and tab content
//!
//! The body of an admonition or content tab must be indented by four spaces or a tab
//! relative to its header. The first non-blank line after the header is checked.

use crate::lint_context::{LineInfo, LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};
use crate::utils::line_utils::{
    first_non_whitespace_column, is_heading, leading_whitespace, next_non_blank, starts_with_emphasis,
};
use crate::utils::mkdocs_admonitions::has_required_indentation;

const ADMONITION_MESSAGE: &str = "Admonition content must be indented by 4 spaces or a tab.";
const TAB_MESSAGE: &str = "Tab content must be indented by 4 spaces or a tab.";

#[derive(Debug, Clone)]
pub struct MM006IndentedContent {
    enabled: bool,
}

impl Default for MM006IndentedContent {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MM006IndentedContent {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Lines that open their own block rather than continue the header's body.
    fn is_block_level(info: &LineInfo, line: &str) -> bool {
        matches!(
            info.role,
            LineRole::AdmonitionHeader | LineRole::TabHeader | LineRole::Heading | LineRole::HorizontalRule
        ) || is_heading(line.trim_start())
            || starts_with_emphasis(line)
    }

    fn check_body(
        &self,
        ctx: &LintContext,
        header_line: usize,
        message: &str,
        skip: fn(&LineInfo) -> bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let lines = ctx.raw_lines();
        let Some(next) = next_non_blank(lines, header_line + 1) else {
            return;
        };
        let Some(next_info) = ctx.line_info(next) else {
            return;
        };
        let next_text = lines[next];

        // Flush-left content belongs to whatever follows the block
        if skip(next_info) || next_info.indent == 0 || Self::is_block_level(next_info, next_text) {
            return;
        }
        let column = first_non_whitespace_column(next_text);

        let header_indent = leading_whitespace(lines[header_line]);
        if !has_required_indentation(next_text, header_indent) {
            diagnostics.push(Diagnostic::at_column(
                self.name(),
                next,
                next_text,
                column,
                message,
                Severity::Error,
            ));
        }
    }
}

impl Rule for MM006IndentedContent {
    fn name(&self) -> &'static str {
        "MM006"
    }

    fn alias(&self) -> &'static str {
        "indented-content"
    }

    fn description(&self) -> &'static str {
        "Admonition and tab content must be indented by 4 spaces or a tab"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Admonition
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        if !self.enabled {
            return;
        }

        match ctx.role(line) {
            Some(LineRole::AdmonitionHeader) => {
                self.check_body(ctx, line, ADMONITION_MESSAGE, |info| info.is_list, diagnostics);
            }
            Some(LineRole::TabHeader) => {
                self.check_body(ctx, line, TAB_MESSAGE, |info| info.role == LineRole::TabHeader, diagnostics);
            }
            _ => {}
        }
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM006IndentedContent::new(config.lint.check_indentation))
    }
}
