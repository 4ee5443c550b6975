pub mod annotations;
pub mod config;
pub mod exit_codes;
pub mod lint_context;
pub mod rule;
pub mod rules;
pub mod theme;
pub mod utils;

// Native-only modules (require tokio, tower-lsp, etc.)
#[cfg(feature = "native")]
pub mod lsp;
#[cfg(feature = "native")]
pub mod output;

pub use rules::*;

pub use crate::annotations::Annotations;
pub use crate::lint_context::{LineInfo, LintContext};
pub use crate::rule::{Diagnostic, Rule, Severity};
pub use crate::theme::{Stylesheet, Theme, compute_stylesheet};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::annotations::AnnotationBuilder;

/// Document languages the scanner accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Markdown,
    Mdx,
}

impl Language {
    /// Editor language id (`markdown`, `mdx`)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "markdown" => Some(Language::Markdown),
            "mdx" => Some(Language::Mdx),
            _ => None,
        }
    }

    /// File extension (`.md`, `.markdown`, `.mdx`, ...)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" | "mkd" | "mkdn" | "mdown" => Some(Language::Markdown),
            "mdx" => Some(Language::Mdx),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Markdown => "markdown",
            Language::Mdx => "mdx",
        }
    }
}

/// Everything one pass over a document produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutput {
    pub diagnostics: Vec<Diagnostic>,
    pub annotations: Annotations,
}

/// Scan a document with the given rules.
///
/// A single walk over the lines: every rule sees each normal-mode line in rule order,
/// and the same line is then fed to the annotation builder. Document-level checks
/// run after the last line. Assumes `rules` is the final, configured and filtered set.
pub fn scan(content: &str, rules: &[Box<dyn Rule>]) -> ScanOutput {
    let ctx = LintContext::new(content);
    let mut diagnostics = Vec::new();
    let mut builder = AnnotationBuilder::new(&ctx);

    for index in 0..ctx.line_count() {
        if ctx.line_info(index).is_some_and(LineInfo::is_normal) {
            for rule in rules {
                rule.check_line(&ctx, index, &mut diagnostics);
            }
        }
        builder.observe(index);
    }

    for rule in rules {
        rule.check_document(&ctx, &mut diagnostics);
    }

    let annotations = builder.finish();
    log::debug!(
        "Scanned {} lines with {} rules: {} diagnostics",
        ctx.line_count(),
        rules.len(),
        diagnostics.len()
    );

    ScanOutput {
        diagnostics,
        annotations,
    }
}

/// Lint a document, discarding annotations
pub fn lint(content: &str, rules: &[Box<dyn Rule>]) -> Vec<Diagnostic> {
    scan(content, rules).diagnostics
}

/// Scan a document identified by an editor language id, with rules built from `config`.
///
/// Ineligible languages produce an empty output.
pub fn scan_document(content: &str, language_id: &str, config: &config::Config) -> ScanOutput {
    if Language::from_id(language_id).is_none() {
        log::trace!("Skipping document with language id '{language_id}'");
        return ScanOutput::default();
    }
    let rules = rules::enabled_rules(config);
    scan(content, &rules)
}
