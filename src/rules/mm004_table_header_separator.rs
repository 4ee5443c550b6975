//!
//! Rule MM004: Table header separator
//!
//! The first row of a pipe table must be followed by a separator row with the same
//! number of columns. Only the header row of each table is inspected.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};
use crate::utils::line_utils::{next_non_blank, prev_non_blank};
use crate::utils::table_utils::{count_columns, is_row_line};

#[derive(Debug, Clone, Default)]
pub struct MM004TableHeaderSeparator;

impl Rule for MM004TableHeaderSeparator {
    fn name(&self) -> &'static str {
        "MM004"
    }

    fn alias(&self) -> &'static str {
        "table-header-separator"
    }

    fn description(&self) -> &'static str {
        "Table headers need a separator row with a matching column count"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Table
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        let lines = ctx.raw_lines();
        let text = ctx.line_text(line);
        let Some(info) = ctx.line_info(line) else {
            return;
        };
        if !info.is_table || info.role == LineRole::TableSeparator {
            return;
        }

        // Body rows were validated through their header
        if let Some(prev) = prev_non_blank(lines, line)
            && (is_row_line(lines[prev]) || ctx.has_role(prev, LineRole::TableSeparator))
        {
            return;
        }

        let Some(next) = next_non_blank(lines, line + 1) else {
            return;
        };
        let next_text = lines[next];

        if !ctx.has_role(next, LineRole::TableSeparator) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "Table header must be followed by a separator row.",
                Severity::Error,
            ));
            return;
        }

        if count_columns(text) != count_columns(next_text) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                next,
                next_text,
                "Table separator column count must match the header.",
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM004TableHeaderSeparator)
    }
}
