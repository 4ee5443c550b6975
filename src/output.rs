//! Diagnostic formatting for the command line.
//!
//! Line and column numbers are 1-based in every format. Columns count characters.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::rule::{Diagnostic, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `file:line:col: severity[rule] message`, coloured
    #[default]
    Text,
    /// `file:line:col rule message`
    Concise,
    /// One JSON array for the whole run
    Json,
    /// One JSON object per diagnostic
    JsonLines,
    /// GitHub Actions workflow commands
    GitHub,
}

impl OutputFormat {
    /// Formats that must be printed as one document after every file is checked
    pub fn is_batch(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "text" => Ok(OutputFormat::Text),
            "concise" => Ok(OutputFormat::Concise),
            "json" => Ok(OutputFormat::Json),
            "json-lines" | "jsonl" => Ok(OutputFormat::JsonLines),
            "github" => Ok(OutputFormat::GitHub),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Serialized shape of one diagnostic in the JSON formats
#[derive(Debug, Serialize)]
struct JsonDiagnostic<'a> {
    file: &'a str,
    line: usize,
    column: usize,
    end_line: usize,
    end_column: usize,
    rule: &'a str,
    severity: Severity,
    message: &'a str,
}

impl<'a> JsonDiagnostic<'a> {
    fn new(path: &'a str, diagnostic: &'a Diagnostic) -> Self {
        Self {
            file: path,
            line: diagnostic.line + 1,
            column: diagnostic.start_char + 1,
            end_line: diagnostic.line + 1,
            end_column: diagnostic.end_char + 1,
            rule: &diagnostic.rule,
            severity: diagnostic.severity,
            message: &diagnostic.message,
        }
    }
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    }
}

/// Escape data for a GitHub workflow command message
fn escape_github_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a GitHub workflow command property value
fn escape_github_property(value: &str) -> String {
    escape_github_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format one diagnostic for the line-oriented formats.
///
/// Returns `None` for [`OutputFormat::Json`], which is rendered by [`format_json`].
pub fn format_diagnostic(format: OutputFormat, path: &str, diagnostic: &Diagnostic) -> Option<String> {
    let line = diagnostic.line + 1;
    let column = diagnostic.start_char + 1;

    match format {
        OutputFormat::Text => Some(format!(
            "{}:{}:{}: {}[{}] {}",
            path.blue().underline(),
            line.to_string().cyan(),
            column.to_string().cyan(),
            severity_label(diagnostic.severity),
            diagnostic.rule.yellow(),
            diagnostic.message
        )),
        OutputFormat::Concise => Some(format!(
            "{path}:{line}:{column} {} {}",
            diagnostic.rule, diagnostic.message
        )),
        OutputFormat::JsonLines => serde_json::to_string(&JsonDiagnostic::new(path, diagnostic)).ok(),
        OutputFormat::GitHub => {
            let level = match diagnostic.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            Some(format!(
                "::{level} file={},line={line},col={column},endColumn={},title={}::{}",
                escape_github_property(path),
                diagnostic.end_char + 1,
                escape_github_property(&diagnostic.rule),
                escape_github_data(&diagnostic.message)
            ))
        }
        OutputFormat::Json => None,
    }
}

/// Render every file's diagnostics as one pretty-printed JSON array.
pub fn format_json(results: &[(String, Vec<Diagnostic>)]) -> String {
    let entries: Vec<JsonDiagnostic> = results
        .iter()
        .flat_map(|(path, diagnostics)| diagnostics.iter().map(move |d| JsonDiagnostic::new(path, d)))
        .collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Per-rule counts, sorted by rule code
pub fn format_statistics(results: &[(String, Vec<Diagnostic>)]) -> String {
    let mut counts: std::collections::BTreeMap<&str, usize> = std::collections::BTreeMap::new();
    for diagnostic in results.iter().flat_map(|(_, d)| d) {
        *counts.entry(diagnostic.rule.as_str()).or_default() += 1;
    }

    let mut out = String::new();
    for (rule, count) in counts {
        let _ = writeln!(out, "{count:>6}  {rule}");
    }
    out
}
