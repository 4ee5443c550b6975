//!
//! Rule MM007: Blank line after admonition header
//!
//! Opt-in style check: admonition content starts after a blank line.
//! A list may follow the header directly.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};

#[derive(Debug, Clone, Default)]
pub struct MM007BlankLineAfterAdmonitionHeader {
    enabled: bool,
}

impl MM007BlankLineAfterAdmonitionHeader {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Rule for MM007BlankLineAfterAdmonitionHeader {
    fn name(&self) -> &'static str {
        "MM007"
    }

    fn alias(&self) -> &'static str {
        "blank-line-after-admonition-header"
    }

    fn description(&self) -> &'static str {
        "Admonition content should be preceded by a blank line"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Admonition
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        if !self.enabled || !ctx.has_role(line, LineRole::AdmonitionHeader) {
            return;
        }

        // The literal next line, not the nearest non-blank one
        let next = line + 1;
        let Some(next_info) = ctx.line_info(next) else {
            return;
        };
        if next_info.is_blank || next_info.is_list {
            return;
        }
        let next_text = ctx.line_text(next);

        diagnostics.push(Diagnostic::at_column(
            self.name(),
            next,
            next_text,
            0,
            "Admonition content must be preceded by a blank line.",
            Severity::Error,
        ));
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM007BlankLineAfterAdmonitionHeader::new(
            config.lint.check_blank_line_before_admonition_content,
        ))
    }
}
