//! Handler for the `init` command.

use colored::*;
use std::fs;
use std::path::Path;

use mmlint_lib::config as mmlint_config;
use mmlint_lib::exit_codes::exit;

const DEFAULT_CONFIG_FILE: &str = ".mmlint.toml";
const PYPROJECT_FILE: &str = "pyproject.toml";

/// Rewrite the default config's section headers for a `[tool.mmlint]` table
fn pyproject_config_content() -> String {
    mmlint_config::default_config_content()
        .lines()
        .map(|line| match line.strip_prefix('[') {
            Some(rest) => format!("[tool.mmlint.{rest}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the init command: create a new configuration file.
pub fn handle_init(pyproject: bool, output: Option<String>) {
    if pyproject {
        handle_pyproject_init();
        return;
    }

    let output_path = output.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
    match mmlint_config::create_default_config(output_path) {
        Ok(()) => println!("Created default configuration file: {output_path}"),
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

/// Append a `[tool.mmlint]` section to `pyproject.toml`, creating the file if needed.
fn handle_pyproject_init() {
    let config_content = pyproject_config_content();
    let path = Path::new(PYPROJECT_FILE);

    let new_content = if path.exists() {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}: Failed to read {PYPROJECT_FILE}: {e}", "Error".red().bold());
                exit::tool_error();
            }
        };
        if content.contains("[tool.mmlint") {
            eprintln!(
                "{}: {PYPROJECT_FILE} already contains a [tool.mmlint] section",
                "Error".red().bold()
            );
            exit::tool_error();
        }
        format!("{}\n\n{config_content}\n", content.trim_end())
    } else {
        format!("{config_content}\n")
    };

    match fs::write(path, new_content) {
        Ok(()) => println!("Added mmlint configuration to {PYPROJECT_FILE}"),
        Err(e) => {
            eprintln!("{}: Failed to update {PYPROJECT_FILE}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
