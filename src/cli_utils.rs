//! Shared CLI utility functions used across command handlers.

use colored::*;
use std::io::{self, Read};
use std::path::Path;

use mmlint_lib::config::{self as mmlint_config, ConfigSource, LintOverrides};
use mmlint_lib::exit_codes::exit;

use crate::CheckArgs;

/// Split a comma-separated flag value, dropping empty entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The `--check-*` flags as lint overrides
pub fn lint_overrides(args: &CheckArgs) -> LintOverrides {
    LintOverrides {
        check_indentation: args.check_indentation,
        check_blank_line_before_admonition_content: args.check_blank_line_before_admonition_content,
        check_blank_line_before_list: args.check_blank_line_before_list,
    }
}

/// Apply CLI argument overrides to a sourced config.
pub fn apply_cli_overrides(sourced: &mut mmlint_config::SourcedConfig, args: &CheckArgs) {
    sourced.apply_cli_rules(
        args.enable.as_deref().map(split_list),
        args.disable.as_deref().map(split_list),
    );

    if let Some(ref exclude) = args.exclude {
        sourced.apply_cli_exclude(split_list(exclude));
    }

    if let Some(ref include) = args.include {
        sourced
            .global
            .include
            .merge_override(split_list(include), ConfigSource::Cli, None);
    }

    // Lets the CLI override the config file setting
    if let Some(respect_gitignore) = args.respect_gitignore {
        sourced
            .global
            .respect_gitignore
            .merge_override(respect_gitignore, ConfigSource::Cli, None);
    }

    let overrides = lint_overrides(args);
    if !overrides.is_empty() {
        sourced.apply_cli_lint(&overrides);
    }
}

/// Read all of stdin as UTF-8
pub fn read_stdin() -> io::Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Read stdin or a file, exiting with a tool error when that fails.
pub fn read_input_or_exit(file: Option<&str>) -> String {
    let result = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}")),
        None => read_stdin().map_err(|e| format!("Failed to read from stdin: {e}")),
    };
    result.unwrap_or_else(|message| {
        eprintln!("{}: {message}", "Error".red().bold());
        exit::tool_error();
    })
}

/// Load configuration with standard CLI error handling.
pub fn load_config_with_cli_error_handling(config_path: Option<&str>, isolated: bool) -> mmlint_config::SourcedConfig {
    load_config_with_cli_error_handling_with_dir(config_path, isolated, None)
}

/// Load configuration with standard CLI error handling, optionally using a discovery directory.
pub fn load_config_with_cli_error_handling_with_dir(
    config_path: Option<&str>,
    isolated: bool,
    discovery_dir: Option<&Path>,
) -> mmlint_config::SourcedConfig {
    match mmlint_config::SourcedConfig::load_with_discovery(config_path, discovery_dir, isolated) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}

/// Print config validation warnings unless output is silenced
pub fn print_config_warnings(warnings: &[mmlint_config::ConfigValidationWarning], label: &str, silent: bool) {
    if silent {
        return;
    }
    for warn in warnings {
        eprintln!("\x1b[33m[{label} warning]\x1b[0m {}", warn.message);
    }
}
