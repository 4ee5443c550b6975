//! Handler for the `rule` command.

use clap::ValueEnum;
use colored::*;
use serde::Serialize;

use mmlint_lib::config::Config;
use mmlint_lib::config::registry::resolve_rule_name_alias;
use mmlint_lib::exit_codes::exit;
use mmlint_lib::rule::Rule;
use mmlint_lib::rules::all_rules;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RuleInfo {
    code: &'static str,
    alias: &'static str,
    description: &'static str,
    category: &'static str,
}

impl RuleInfo {
    fn from_rule(rule: &dyn Rule) -> Self {
        Self {
            code: rule.name(),
            alias: rule.alias(),
            description: rule.description(),
            category: rule.category().as_str(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}

/// List every rule, or describe the one named by code or alias.
pub fn handle_rule(rule: Option<String>, output_format: OutputFormat) {
    let rules = all_rules(&Config::default());

    let Some(name) = rule else {
        let infos: Vec<RuleInfo> = rules.iter().map(|r| RuleInfo::from_rule(r.as_ref())).collect();
        match output_format {
            OutputFormat::Json => print_json(&infos),
            OutputFormat::Text => {
                println!("{}", "Available rules:".bold());
                for info in &infos {
                    println!(
                        "  {} {:<36} {}",
                        info.code.yellow(),
                        format!("({})", info.alias),
                        info.description
                    );
                }
                println!("\nTotal rules: {}", infos.len());
            }
        }
        return;
    };

    let Some(code) = resolve_rule_name_alias(&name) else {
        eprintln!("{}: Rule '{name}' not found.", "Error".red().bold());
        exit::tool_error();
    };
    let Some(found) = rules.iter().find(|r| r.name() == code) else {
        eprintln!("{}: Rule '{name}' not found.", "Error".red().bold());
        exit::tool_error();
    };

    let info = RuleInfo::from_rule(found.as_ref());
    match output_format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Text => {
            println!("{} - {}", info.code.yellow().bold(), info.description);
            println!("Alias: {}", info.alias);
            println!("Category: {}", info.category);
        }
    }
}
