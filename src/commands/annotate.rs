//! Handler for the `annotate` command.

use colored::*;
use std::path::Path;

use mmlint_lib::config::Config;
use mmlint_lib::exit_codes::exit;
use mmlint_lib::{Language, scan_document};

use crate::cli_utils::{load_config_with_cli_error_handling, print_config_warnings, read_input_or_exit};

/// Language id for the input: `--language` wins, then the file extension, then `markdown`.
fn resolve_language(file: Option<&str>, language: Option<String>) -> String {
    if let Some(language) = language {
        return language;
    }
    match file {
        Some(path) => Language::from_path(Path::new(path))
            .map_or_else(|| "plaintext".to_string(), |lang| lang.as_str().to_string()),
        None => Language::Markdown.as_str().to_string(),
    }
}

/// Print the decoration ranges of one document as JSON.
pub fn handle_annotate(
    file: Option<String>,
    stdin: bool,
    language: Option<String>,
    config_path: Option<&str>,
    isolated: bool,
) {
    if file.is_none() && !stdin {
        eprintln!("{}: Provide a file or --stdin", "Error".red().bold());
        exit::tool_error();
    }

    let sourced = load_config_with_cli_error_handling(config_path, isolated);
    print_config_warnings(&sourced.validation_warnings, "config", false);
    let config: Config = sourced.into();

    let input = if stdin { None } else { file.as_deref() };
    let content = read_input_or_exit(input);
    let language_id = resolve_language(input, language);
    log::debug!("Annotating as '{language_id}'");

    let output = scan_document(&content, &language_id, &config);
    match serde_json::to_string_pretty(&output.annotations) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}: Failed to serialize annotations: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
