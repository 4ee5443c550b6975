//!
//! Rule MM002: Content tab syntax
//!
//! A tab header is `===`, a space, and a title wrapped in matching quotes.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};
use crate::utils::mkdocs_tabs::{is_quoted_title, missing_space_column, tab_title};

#[derive(Debug, Clone, Default)]
pub struct MM002TabSyntax;

impl Rule for MM002TabSyntax {
    fn name(&self) -> &'static str {
        "MM002"
    }

    fn alias(&self) -> &'static str {
        "tab-syntax"
    }

    fn description(&self) -> &'static str {
        "Tab markers need a space and a quoted title"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Tab
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        let text = ctx.line_text(line);

        // A glued marker is reported on its own; the title is not inspected
        if let Some(column) = missing_space_column(text) {
            diagnostics.push(Diagnostic::at_column(
                self.name(),
                line,
                text,
                column,
                "Tab marker must be followed by a space.",
                Severity::Error,
            ));
            return;
        }

        if !ctx.has_role(line, LineRole::TabHeader) {
            return;
        }
        if let Some(title) = tab_title(text)
            && !is_quoted_title(title)
        {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "Tab title must be wrapped in matching quotes.",
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM002TabSyntax)
    }
}
