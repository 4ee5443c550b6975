//! Handler for the `check` command.

use colored::*;
use std::path::Path;

use mmlint_lib::config as mmlint_config;
use mmlint_lib::exit_codes::exit;
use mmlint_lib::output::{self, OutputFormat};
use mmlint_lib::rule::{Diagnostic, Severity};
use mmlint_lib::{lint, rules};

use crate::CheckArgs;
use crate::cli_utils::{
    apply_cli_overrides, load_config_with_cli_error_handling_with_dir, print_config_warnings, read_stdin,
};
use crate::file_processor::{find_markdown_files, process_files};

/// Name shown for stdin input when `--stdin-filename` is not given
const STDIN_DISPLAY_NAME: &str = "<stdin>";

/// Output format precedence: `--output-format` > config file > text
fn resolve_output_format(args: &CheckArgs, config: &mmlint_config::Config, silent: bool) -> OutputFormat {
    if let Some(format) = args.output_format {
        return format.into();
    }
    match config.global.output_format.as_deref().map(str::parse::<OutputFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            if !silent {
                eprintln!("\x1b[33m[config warning]\x1b[0m {e}");
            }
            OutputFormat::default()
        }
        None => OutputFormat::default(),
    }
}

fn print_summary(results: &[(String, Vec<Diagnostic>)], files_checked: usize) {
    let total: usize = results.iter().map(|(_, d)| d.len()).sum();
    let files_with_issues = results.iter().filter(|(_, d)| !d.is_empty()).count();
    let file_word = |n: usize| if n == 1 { "file" } else { "files" };

    if total == 0 {
        println!(
            "{} No issues found in {files_checked} {}",
            "Success:".green().bold(),
            file_word(files_checked)
        );
    } else {
        let issue_word = if total == 1 { "issue" } else { "issues" };
        println!(
            "\n{} Found {total} {issue_word} in {files_with_issues} {} ({files_checked} {} checked)",
            "Issues:".yellow().bold(),
            file_word(files_with_issues),
            file_word(files_checked)
        );
    }
}

/// Run the check command.
pub fn run_check(args: &CheckArgs, global_config_path: Option<&str>, isolated: bool) {
    let quiet = args.quiet;
    let silent = args.silent;

    // Discover config from the first target path, so tools that pass relative
    // file paths still pick up the project config
    let discovery_dir = if !args.paths.is_empty() {
        let first_path = Path::new(&args.paths[0]);
        if first_path.is_dir() {
            Some(first_path)
        } else {
            first_path.parent().filter(|&parent| parent.is_dir())
        }
    } else {
        None
    };

    let mut sourced = load_config_with_cli_error_handling_with_dir(global_config_path, isolated, discovery_dir);
    print_config_warnings(&sourced.validation_warnings, "config", silent);

    let cli_warnings = mmlint_config::validation::validate_cli_rule_names(args.enable.as_deref(), args.disable.as_deref());
    print_config_warnings(&cli_warnings, "cli", silent);

    apply_cli_overrides(&mut sourced, args);
    for line in sourced.lint.describe() {
        log::debug!("{line}");
    }
    let config: mmlint_config::Config = sourced.into();

    let format = resolve_output_format(args, &config, silent);
    let enabled = rules::enabled_rules(&config);
    log::debug!("Running {} rules", enabled.len());

    let mut results: Vec<(String, Vec<Diagnostic>)> = Vec::new();
    let mut had_read_error = false;

    if args.stdin {
        let content = match read_stdin() {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}: Failed to read from stdin: {e}", "Error".red().bold());
                exit::tool_error();
            }
        };
        let display = args.stdin_filename.as_deref().unwrap_or(STDIN_DISPLAY_NAME).to_string();
        results.push((display, lint(&content, &enabled)));
    } else {
        let files = match find_markdown_files(&args.paths, &config, args.no_exclude) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("{}: {e}", "Error".red().bold());
                exit::tool_error();
            }
        };

        if files.is_empty() && !quiet && !silent {
            println!("No markdown files found to check.");
            return;
        }

        for report in process_files(&files, &enabled) {
            match report.outcome {
                Ok(diagnostics) => results.push((report.display_path, diagnostics)),
                Err(message) => {
                    had_read_error = true;
                    if !silent {
                        eprintln!("{}: {message}", "Error".red().bold());
                    }
                }
            }
        }
    }

    if !silent {
        if format.is_batch() {
            println!("{}", output::format_json(&results));
        } else {
            for (path, diagnostics) in &results {
                for diagnostic in diagnostics {
                    if let Some(line) = output::format_diagnostic(format, path, diagnostic) {
                        println!("{line}");
                    }
                }
            }
        }

        if args.statistics {
            let stats = output::format_statistics(&results);
            if !stats.is_empty() {
                eprintln!("\n{}", "Rule statistics:".bold());
                eprint!("{stats}");
            }
        }

        if !quiet && format == OutputFormat::Text {
            print_summary(&results, results.len());
        }
    }

    let has_severity = |severity: Severity| results.iter().flat_map(|(_, d)| d).any(|d| d.severity == severity);
    let has_errors = has_severity(Severity::Error);
    let has_warnings = has_severity(Severity::Warning);

    if args.fail_on.should_fail(has_warnings, has_errors) {
        exit::violations_found();
    }
    if had_read_error {
        exit::tool_error();
    }
}
