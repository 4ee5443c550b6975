//!
//! Rule MM009: Unclosed math block
//!
//! Display math opened with `$$` on its own line needs a closing `$$` line.

use crate::lint_context::LintContext;
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};

#[derive(Debug, Clone, Default)]
pub struct MM009UnclosedMathBlock;

impl Rule for MM009UnclosedMathBlock {
    fn name(&self) -> &'static str {
        "MM009"
    }

    fn alias(&self) -> &'static str {
        "unclosed-math-block"
    }

    fn description(&self) -> &'static str {
        "Math blocks must be closed with $$"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Math
    }

    fn check_document(&self, ctx: &LintContext, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(start) = ctx.unclosed_math {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                start,
                ctx.line_text(start),
                "Math block must be closed with $$.",
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM009UnclosedMathBlock)
    }
}
