//!
//! Rule MM008: Unclosed code fence
//!
//! A fence left open swallows the rest of the document. Reported once, on the
//! opening line.

use crate::lint_context::LintContext;
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};

#[derive(Debug, Clone, Default)]
pub struct MM008UnclosedCodeFence;

impl Rule for MM008UnclosedCodeFence {
    fn name(&self) -> &'static str {
        "MM008"
    }

    fn alias(&self) -> &'static str {
        "unclosed-code-fence"
    }

    fn description(&self) -> &'static str {
        "Code fences must be closed"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CodeBlock
    }

    fn check_document(&self, ctx: &LintContext, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(start) = ctx.unclosed_fence {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                start,
                ctx.line_text(start),
                "Code fence must be closed.",
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM008UnclosedCodeFence)
    }
}
