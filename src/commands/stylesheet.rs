//! Handler for the `stylesheet` command.

use colored::*;

use mmlint_lib::config::Config;
use mmlint_lib::exit_codes::exit;
use mmlint_lib::{Theme, compute_stylesheet};

use crate::cli_utils::load_config_with_cli_error_handling;

/// Print the decoration colours for `theme` as JSON, honouring `[decorations]`.
pub fn handle_stylesheet(theme: Theme, config_path: Option<&str>, isolated: bool) {
    let config: Config = load_config_with_cli_error_handling(config_path, isolated).into();
    let sheet = compute_stylesheet(&config.decorations, theme);

    match serde_json::to_string_pretty(&sheet) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}: Failed to serialize stylesheet: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
