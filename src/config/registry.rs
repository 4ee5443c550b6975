use phf::phf_map;
use std::collections::HashSet;

/// Canonical rule codes, in execution order
pub const RULE_CODES: &[&str] = &[
    "MM001", "MM002", "MM003", "MM004", "MM005", "MM006", "MM007", "MM008", "MM009",
];

/// Maps rule codes and uppercase aliases to canonical rule codes
pub static RULE_ALIAS_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Canonical codes map to themselves
    "MM001" => "MM001",
    "MM002" => "MM002",
    "MM003" => "MM003",
    "MM004" => "MM004",
    "MM005" => "MM005",
    "MM006" => "MM006",
    "MM007" => "MM007",
    "MM008" => "MM008",
    "MM009" => "MM009",

    // Aliases (hyphen format)
    "ADMONITION-SYNTAX" => "MM001",
    "TAB-SYNTAX" => "MM002",
    "LIST-MARKER-SPACE" => "MM003",
    "TABLE-HEADER-SEPARATOR" => "MM004",
    "BLANK-LINE-BEFORE-LIST" => "MM005",
    "INDENTED-CONTENT" => "MM006",
    "BLANK-LINE-AFTER-ADMONITION-HEADER" => "MM007",
    "UNCLOSED-CODE-FENCE" => "MM008",
    "UNCLOSED-MATH-BLOCK" => "MM009",
};

/// Normalizes configuration keys (rule names, option names) to lowercase kebab-case.
///
/// Rule codes (`mm001`) are uppercased. camelCase keys used by editor settings
/// (`checkIndentation`) become `check-indentation`.
pub fn normalize_key(key: &str) -> String {
    if key.len() == 5 && key.to_ascii_lowercase().starts_with("mm") && key[2..].chars().all(|c| c.is_ascii_digit()) {
        return key.to_ascii_uppercase();
    }

    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if c == '_' {
            out.push('-');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// Resolve a rule name alias to its canonical code
///
/// Returns None if the rule name is not recognized.
pub fn resolve_rule_name_alias(key: &str) -> Option<&'static str> {
    let normalized_key = key.trim().to_ascii_uppercase().replace('_', "-");
    RULE_ALIAS_MAP.get(normalized_key.as_str()).copied()
}

/// Resolves a rule name to its canonical code, supporting both codes and aliases.
/// - "MM001" → "MM001"
/// - "admonition-syntax" → "MM001"
/// - "ADMONITION_SYNTAX" → "MM001"
///
/// Unknown names fall back to [`normalize_key`].
pub fn resolve_rule_name(name: &str) -> String {
    resolve_rule_name_alias(name)
        .map(|s| s.to_string())
        .unwrap_or_else(|| normalize_key(name.trim()))
}

/// Resolves a comma-separated list of rule names to canonical codes.
/// Empty entries and whitespace are filtered out.
pub fn resolve_rule_names(input: &str) -> HashSet<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(resolve_rule_name)
        .collect()
}

/// Checks if a rule name (or alias, or the special "all") is valid.
pub fn is_valid_rule_name(name: &str) -> bool {
    if name.trim().eq_ignore_ascii_case("all") {
        return true;
    }
    resolve_rule_name_alias(name).is_some()
}
