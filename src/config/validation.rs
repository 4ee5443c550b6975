use super::registry::{RULE_ALIAS_MAP, normalize_key, resolve_rule_name_alias};
use super::source_tracking::ConfigValidationWarning;

/// Known sections and their keys, in normalized (kebab-case) form
const KNOWN_SECTIONS: &[(&str, &[&str])] = &[
    (
        "global",
        &[
            "enable",
            "disable",
            "exclude",
            "include",
            "respect-gitignore",
            "output-format",
        ],
    ),
    (
        "lint",
        &[
            "check-indentation",
            "check-blank-line-before-admonition-content",
            "check-blank-line-before-list",
        ],
    ),
    ("decorations", &["enabled", "background", "gutter"]),
];

fn all_rule_names() -> Vec<String> {
    RULE_ALIAS_MAP.keys().map(|s| s.to_string()).collect()
}

fn unknown_rule_message(name: &str, location: &str, known: &[String]) -> String {
    match suggest_similar_key(name, known) {
        Some(suggestion) => {
            let formatted = if suggestion.starts_with("MM") {
                suggestion
            } else {
                suggestion.to_lowercase()
            };
            format!("Unknown rule in {location}: {name} (did you mean: {formatted}?)")
        }
        None => format!("Unknown rule in {location}: {name}"),
    }
}

/// Validates rule names from CLI flags against the known rule set.
/// Returns warnings for unknown rules with "did you mean" suggestions.
///
/// Unknown rules are warned about but don't cause failures.
pub fn validate_cli_rule_names(enable: Option<&str>, disable: Option<&str>) -> Vec<ConfigValidationWarning> {
    let mut warnings = Vec::new();
    let known = all_rule_names();

    let mut validate_list = |input: &str, flag_name: &str| {
        for name in input.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if name.eq_ignore_ascii_case("all") || resolve_rule_name_alias(name).is_some() {
                continue;
            }
            warnings.push(ConfigValidationWarning {
                message: unknown_rule_message(name, flag_name, &known),
                rule: Some(name.to_string()),
                key: None,
            });
        }
    };

    if let Some(e) = enable {
        validate_list(e, "--enable");
    }
    if let Some(d) = disable {
        validate_list(d, "--disable");
    }

    warnings
}

/// Validates a parsed config table: unknown sections, unknown keys, and unknown
/// rule names in `enable`/`disable`.
///
/// `file` is only used in messages.
pub fn validate_config_table(table: &toml::Table, file: &str) -> Vec<ConfigValidationWarning> {
    let mut warnings = Vec::new();
    let section_names: Vec<String> = KNOWN_SECTIONS.iter().map(|(name, _)| name.to_string()).collect();
    let known_rules = all_rule_names();

    for (section, value) in table {
        let normalized_section = normalize_key(section);
        let Some((_, keys)) = KNOWN_SECTIONS.iter().find(|(name, _)| *name == normalized_section) else {
            let message = match suggest_similar_key(section, &section_names) {
                Some(s) => format!("Unknown section [{section}] in {file} (did you mean: [{s}]?)"),
                None => format!("Unknown section [{section}] in {file}"),
            };
            warnings.push(ConfigValidationWarning {
                message,
                rule: None,
                key: Some(section.clone()),
            });
            continue;
        };

        let Some(section_table) = value.as_table() else {
            continue;
        };

        let key_names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        for (key, value) in section_table {
            let normalized = normalize_key(key);
            if !keys.contains(&normalized.as_str()) {
                let message = match suggest_similar_key(&normalized, &key_names) {
                    Some(s) => format!("Unknown key '{key}' in [{section}] in {file} (did you mean: {s}?)"),
                    None => format!("Unknown key '{key}' in [{section}] in {file}"),
                };
                warnings.push(ConfigValidationWarning {
                    message,
                    rule: None,
                    key: Some(key.clone()),
                });
                continue;
            }

            if normalized_section == "global" && (normalized == "enable" || normalized == "disable") {
                let Some(names) = value.as_array() else {
                    continue;
                };
                for name in names.iter().filter_map(|v| v.as_str()) {
                    if name.eq_ignore_ascii_case("all") || resolve_rule_name_alias(name).is_some() {
                        continue;
                    }
                    let location = format!("global.{normalized}");
                    warnings.push(ConfigValidationWarning {
                        message: unknown_rule_message(name, &location, &known_rules),
                        rule: Some(name.to_string()),
                        key: Some(normalized.clone()),
                    });
                }
            }
        }
    }

    warnings
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] { 0 } else { 1 };
            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Suggest a similar key from a list of valid keys using fuzzy matching
pub fn suggest_similar_key(unknown: &str, valid_keys: &[String]) -> Option<String> {
    let unknown_lower = unknown.to_lowercase();
    let max_distance = 2.max(unknown.len() / 3);

    let mut best_match: Option<(String, usize)> = None;

    for valid in valid_keys {
        let distance = levenshtein_distance(&unknown_lower, &valid.to_lowercase());
        if distance > max_distance {
            continue;
        }
        match &best_match {
            Some((_, best_dist)) if distance >= *best_dist => {}
            _ => best_match = Some((valid.clone(), distance)),
        }
    }

    best_match.map(|(key, _)| key)
}
