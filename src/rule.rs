//!
//! This module defines the Rule trait and the diagnostic types shared by all mmlint rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lint_context::LintContext;
use crate::utils::range_utils::{full_line_range, single_char_range};

/// Severity of a diagnostic.
///
/// Errors are dialect-breaking syntax problems; warnings are style or heuristic findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding, anchored to one line.
///
/// `line` is 0-based. `start_char` and `end_char` are 0-based character columns
/// (end exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: String,
}

impl Diagnostic {
    /// Diagnostic spanning the whole of `text`, the content of line `line`.
    pub fn full_line(rule: &str, line: usize, text: &str, message: impl Into<String>, severity: Severity) -> Self {
        let (start_char, end_char) = full_line_range(text);
        Self {
            line,
            start_char,
            end_char,
            message: message.into(),
            severity,
            rule: rule.to_string(),
        }
    }

    /// Diagnostic covering the single character at `column`.
    pub fn at_column(
        rule: &str,
        line: usize,
        text: &str,
        column: usize,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        let (start_char, end_char) = single_char_range(text, column);
        Self {
            line,
            start_char,
            end_char,
            message: message.into(),
            severity,
            rule: rule.to_string(),
        }
    }
}

/// Coarse grouping of rules, used by `mmlint rule` listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Admonition,
    Tab,
    List,
    Table,
    CodeBlock,
    Math,
}

impl RuleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Admonition => "admonition",
            RuleCategory::Tab => "tab",
            RuleCategory::List => "list",
            RuleCategory::Table => "table",
            RuleCategory::CodeBlock => "code-block",
            RuleCategory::Math => "math",
        }
    }
}

/// A single lint check.
///
/// The scan driver calls [`Rule::check_line`] for every line outside frontmatter,
/// code fences and math blocks, in document order, and [`Rule::check_document`] once
/// after the last line. Rules only ever append to the diagnostic list.
pub trait Rule: Send + Sync {
    /// Stable rule code, e.g. `MM001`
    fn name(&self) -> &'static str;

    /// Kebab-case alias accepted wherever a rule code is
    fn alias(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    fn check_line(&self, _ctx: &LintContext, _line: usize, _diagnostics: &mut Vec<Diagnostic>) {}

    fn check_document(&self, _ctx: &LintContext, _diagnostics: &mut Vec<Diagnostic>) {}

    /// Run this rule alone over a whole document.
    fn check(&self, ctx: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for line in ctx.normal_lines() {
            self.check_line(ctx, line, &mut diagnostics);
        }
        self.check_document(ctx, &mut diagnostics);
        diagnostics
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized;
}
