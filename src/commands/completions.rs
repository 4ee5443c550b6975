//! Handler for the `completions` command.

use clap::{CommandFactory, ValueEnum};
use clap_complete::shells::Shell;
use colored::*;
use std::io;

use mmlint_lib::exit_codes::exit;

/// Guess the shell from `$SHELL`
fn detect_shell() -> Option<Shell> {
    let shell = std::env::var("SHELL").ok()?;
    let name = std::path::Path::new(&shell).file_name()?.to_str()?;
    Shell::from_str(name, true).ok()
}

/// Print shell completions to stdout.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        for shell in Shell::value_variants() {
            if let Some(value) = shell.to_possible_value() {
                println!("{}", value.get_name());
            }
        }
        return;
    }

    let Some(shell) = shell.or_else(detect_shell) else {
        eprintln!(
            "{}: Could not detect shell from $SHELL; pass one explicitly (see --list)",
            "Error".red().bold()
        );
        exit::tool_error();
    };

    let mut command = crate::Cli::command();
    clap_complete::generate(shell, &mut command, "mmlint", &mut io::stdout());
}
