//!
//! Rule MM001: Admonition syntax
//!
//! Checks `!!!`, `???` and `???+` headers for a type keyword that is a simple,
//! recognized identifier and for a balanced title quote.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};
use crate::utils::mkdocs_admonitions::{has_unclosed_quote, is_known_type, is_simple_identifier, parse_header};

#[derive(Debug, Clone, Default)]
pub struct MM001AdmonitionSyntax;

impl Rule for MM001AdmonitionSyntax {
    fn name(&self) -> &'static str {
        "MM001"
    }

    fn alias(&self) -> &'static str {
        "admonition-syntax"
    }

    fn description(&self) -> &'static str {
        "Admonition headers need a simple, known type and a balanced title"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Admonition
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        if !ctx.has_role(line, LineRole::AdmonitionHeader) {
            return;
        }
        let text = ctx.line_text(line);
        let Some(header) = parse_header(text) else {
            return;
        };

        if header.rest.is_empty() {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "Admonition type is required.",
                Severity::Error,
            ));
            return;
        }

        let type_token = header.type_token();
        if !is_simple_identifier(type_token) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "Admonition type must be a simple identifier.",
                Severity::Error,
            ));
            return;
        }

        if !is_known_type(type_token) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                format!("Unknown admonition type: \"{type_token}\"."),
                Severity::Warning,
            ));
        }

        if has_unclosed_quote(header.rest) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "Admonition title has an unclosed quote.",
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM001AdmonitionSyntax)
    }
}
