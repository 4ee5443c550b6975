//! Wire types for the mmlint language server
//!
//! Conversions between mmlint's character-column model and the protocol's
//! UTF-16 positions live here too.

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::{self, DiagnosticSeverity, NumberOrString, Position, Range, Url};

use crate::annotations::Annotations;
use crate::config::LintOverrides;
use crate::rule::{Diagnostic, Severity};
use crate::theme::Theme;
use crate::utils::range_utils::char_to_utf16_column;

/// Settings key clients may nest mmlint options under
pub const SETTINGS_SECTION: &str = "mmlint";

/// Diagnostic source shown by editors
pub const DIAGNOSTIC_SOURCE: &str = "mmlint";

/// Options a client can pass in `initializationOptions` or `workspace/didChangeConfiguration`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MmlintLspConfig {
    /// Explicit config file, bypassing discovery from the workspace root
    pub config_path: Option<String>,
    /// Rule toggles; unset keys fall back to the config file
    #[serde(flatten)]
    pub lint: LintOverrides,
}

impl MmlintLspConfig {
    /// Parse client settings, accepting both `{ "mmlint": { ... } }` and the bare object.
    pub fn from_settings(value: serde_json::Value) -> Option<Self> {
        let value = match value {
            serde_json::Value::Object(mut obj) if obj.contains_key(SETTINGS_SECTION) => {
                obj.remove(SETTINGS_SECTION).unwrap_or_default()
            }
            other => other,
        };
        if !value.is_object() {
            return None;
        }
        match serde_json::from_value(value) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring invalid mmlint settings: {e}");
                None
            }
        }
    }
}

/// Parameters of the `mmlint/annotations` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationsParams {
    pub uri: Url,
}

/// Parameters of the `mmlint/stylesheet` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetParams {
    #[serde(default)]
    pub theme: Theme,
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Convert an mmlint diagnostic on `line_text` to an LSP diagnostic.
pub fn diagnostic_to_lsp(diagnostic: &Diagnostic, line_text: &str) -> lsp_types::Diagnostic {
    let line = to_u32(diagnostic.line);
    let severity = match diagnostic.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    lsp_types::Diagnostic {
        range: Range {
            start: Position {
                line,
                character: char_to_utf16_column(line_text, diagnostic.start_char),
            },
            end: Position {
                line,
                character: char_to_utf16_column(line_text, diagnostic.end_char),
            },
        },
        severity: Some(severity),
        code: Some(NumberOrString::String(diagnostic.rule.clone())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// Rewrite every range's columns from characters to UTF-16 code units.
pub fn annotations_to_utf16(mut annotations: Annotations, lines: &[&str]) -> Annotations {
    annotations.for_each_range_mut(|range| {
        let text = lines.get(range.line).copied().unwrap_or("");
        range.start_char = char_to_utf16_column(text, range.start_char) as usize;
        range.end_char = char_to_utf16_column(text, range.end_char) as usize;
    });
    annotations
}
