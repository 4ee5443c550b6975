//!
//! Rule MM005: Blank line before list
//!
//! Python-Markdown does not start a list directly after a paragraph line; the list is
//! swallowed into the paragraph. That case is always an error. After headings,
//! horizontal rules and closing fences the list does render, so a missing blank line
//! there is only reported when `check-blank-line-before-list` is enabled.
//!
//! Both cases look at the line immediately above, not the nearest non-blank one.

use crate::lint_context::{LineRole, LintContext};
use crate::rule::{Diagnostic, Rule, RuleCategory, Severity};

#[derive(Debug, Clone, Default)]
pub struct MM005BlankLineBeforeList {
    check_structural: bool,
}

impl MM005BlankLineBeforeList {
    pub fn new(check_structural: bool) -> Self {
        Self { check_structural }
    }
}

impl Rule for MM005BlankLineBeforeList {
    fn name(&self) -> &'static str {
        "MM005"
    }

    fn alias(&self) -> &'static str {
        "blank-line-before-list"
    }

    fn description(&self) -> &'static str {
        "Lists must be separated from a preceding paragraph by a blank line"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn check_line(&self, ctx: &LintContext, line: usize, diagnostics: &mut Vec<Diagnostic>) {
        if line == 0 {
            return;
        }
        let Some(info) = ctx.line_info(line) else {
            return;
        };
        if !info.is_list || info.is_table {
            return;
        }

        let Some(prev) = ctx.line_info(line - 1) else {
            return;
        };
        if prev.is_blank || prev.is_list || matches!(prev.role, LineRole::Blockquote | LineRole::AdmonitionHeader) {
            return;
        }

        // A closing frontmatter delimiter ends metadata, not a paragraph
        let structural = matches!(
            prev.role,
            LineRole::Heading | LineRole::HorizontalRule | LineRole::FenceClose | LineRole::FrontMatterDelimiter
        );

        let text = ctx.line_text(line);
        if !structural && prev.role != LineRole::TabHeader {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "List after paragraph requires a blank line (parsing error).",
                Severity::Error,
            ));
        } else if structural && self.check_structural {
            diagnostics.push(Diagnostic::full_line(
                self.name(),
                line,
                text,
                "List items should be preceded by a blank line.",
                Severity::Warning,
            ));
        }
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule> {
        Box::new(MM005BlankLineBeforeList::new(config.lint.check_blank_line_before_list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str, check_structural: bool) -> Vec<Diagnostic> {
        let ctx = LintContext::new(content);
        MM005BlankLineBeforeList::new(check_structural).check(&ctx)
    }

    #[test]
    fn test_paragraph_then_list_is_always_an_error() {
        for flag in [false, true] {
            let diagnostics = check("Paragraph line\n- list item", flag);
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].severity, Severity::Error);
            assert!(diagnostics[0].message.contains("parsing error"));
            assert_eq!(diagnostics[0].line, 1);
        }
    }

    #[test]
    fn test_allowed_predecessors() {
        assert!(check("Paragraph\n\n- item", true).is_empty());
        assert!(check("- Item\n- Another item", true).is_empty());
        assert!(check("> Quote\n- list item", true).is_empty());
        assert!(check("!!! note\n- list item", true).is_empty());
        assert!(check("=== \"Tab\"\n- list item", true).is_empty());
    }

    #[test]
    fn test_structural_predecessors_are_gated() {
        for content in ["# Heading\n- item", "***\n- item", "```\ncode\n```\n- item"] {
            assert!(check(content, false).is_empty(), "{content}");
            let diagnostics = check(content, true);
            assert_eq!(diagnostics.len(), 1, "{content}");
            assert_eq!(diagnostics[0].severity, Severity::Warning);
            assert_eq!(diagnostics[0].message, "List items should be preceded by a blank line.");
        }
    }

    #[test]
    fn test_closing_frontmatter_is_structural() {
        for content in ["---\ntitle: x\n---\n- item", "---\ntitle: x\n...\n- item"] {
            assert!(check(content, false).is_empty(), "{content}");
            let diagnostics = check(content, true);
            assert_eq!(diagnostics.len(), 1, "{content}");
            assert_eq!(diagnostics[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_quoted_table_row_counts_as_blockquote() {
        assert!(check("> a | b | c\n- list item", false).is_empty());
    }

    #[test]
    fn test_math_block_close_is_a_paragraph_boundary() {
        let diagnostics = check("$$\nx\n$$\n- item", false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn test_first_line_and_non_lists() {
        assert!(check("- item", true).is_empty());
        assert!(check("Paragraph\nMore text", true).is_empty());
    }

    #[test]
    fn test_nearest_non_blank_is_not_used() {
        // The blank line directly above is what matters
        assert!(check("Paragraph\n\n\n- item", true).is_empty());
    }
}
