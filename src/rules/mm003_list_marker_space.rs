//!
//! Rule MM003: List marker spacing
//!
//! `-item`, `1.item` and `- [x]item` render as plain text in Python-Markdown.
//! Bold/italic text, abbreviation definitions, snippet includes, horizontal rules and
//! table lines start with the same characters and are left alone.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};
use crate::utils::line_utils::starts_with_emphasis;
use crate::utils::list_utils::{is_abbreviation_definition, is_snippet_include, marker_spacing_issues};

#[derive(Debug, Clone, Default)]
pub struct MM003ListMarkerSpace;

impl MM003ListMarkerSpace {
    fn is_exempt(ctx: &LintContext, line: usize, text: &str) -> bool {
        // A stray `---` is a horizontal rule here; frontmatter never reaches the rules
        ctx.line_info(line)
            .is_some_and(|info| info.is_table || info.role == LineRole::HorizontalRule)
            || starts_with_emphasis(text)
            || is_abbreviation_definition(text)
            || is_snippet_include(text)
    }
}

impl Rule for MM003ListMarkerSpace {
    fn name(&self) -> &'static str {
        "MM003"
    }

    fn alias(&self) -> &'static str {
        "list-marker-space"
    }

    fn description(&self) -> &'static str {
        "List markers and task checkboxes must be followed by a space"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        let text = ctx.line_text(line);
        if Self::is_exempt(ctx, line, text) {
            return;
        }

        for issue in marker_spacing_issues(text) {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                issue.message(),
                Severity::Error,
            ));
        }
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM003ListMarkerSpace)
    }
}
