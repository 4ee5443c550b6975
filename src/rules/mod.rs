mod mm001_admonition_syntax;
mod mm002_tab_syntax;
mod mm003_list_marker_space;
mod mm004_table_header_separator;
mod mm005_blank_line_before_list;
mod mm006_indented_content;
mod mm007_blank_line_after_admonition_header;
mod mm008_unclosed_code_fence;
mod mm009_unclosed_math_block;

pub use mm001_admonition_syntax::MM001AdmonitionSyntax;
pub use mm002_tab_syntax::MM002TabSyntax;
pub use mm003_list_marker_space::MM003ListMarkerSpace;
pub use mm004_table_header_separator::MM004TableHeaderSeparator;
pub use mm005_blank_line_before_list::MM005BlankLineBeforeList;
pub use mm006_indented_content::MM006IndentedContent;
pub use mm007_blank_line_after_admonition_header::MM007BlankLineAfterAdmonitionHeader;
pub use mm008_unclosed_code_fence::MM008UnclosedCodeFence;
pub use mm009_unclosed_math_block::MM009UnclosedMathBlock;

use crate::config::GlobalConfig;
use crate::config::registry::resolve_rule_name;
use crate::rule::Rule;
use std::collections::HashSet;

/// Type alias for rule constructor functions
type RuleCtor = fn(&crate::config::Config) -> Box<dyn Rule>;

/// Entry in the rule registry
struct RuleEntry {
    name: &'static str,
    ctor: RuleCtor,
}

/// Every rule, in code order. Per line, rules run in this order.
const RULES: &[RuleEntry] = &[
    RuleEntry {
        name: "MM001",
        ctor: MM001AdmonitionSyntax::from_config,
    },
    RuleEntry {
        name: "MM002",
        ctor: MM002TabSyntax::from_config,
    },
    RuleEntry {
        name: "MM003",
        ctor: MM003ListMarkerSpace::from_config,
    },
    RuleEntry {
        name: "MM004",
        ctor: MM004TableHeaderSeparator::from_config,
    },
    RuleEntry {
        name: "MM005",
        ctor: MM005BlankLineBeforeList::from_config,
    },
    RuleEntry {
        name: "MM006",
        ctor: MM006IndentedContent::from_config,
    },
    RuleEntry {
        name: "MM007",
        ctor: MM007BlankLineAfterAdmonitionHeader::from_config,
    },
    RuleEntry {
        name: "MM008",
        ctor: MM008UnclosedCodeFence::from_config,
    },
    RuleEntry {
        name: "MM009",
        ctor: MM009UnclosedMathBlock::from_config,
    },
];

/// Returns all rule instances, configured from `config`
pub fn all_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    RULES.iter().map(|entry| (entry.ctor)(config)).collect()
}

/// Creates a single rule by code or alias with the given config
///
/// Returns None if the rule name is not found.
pub fn create_rule_by_name(name: &str, config: &crate::config::Config) -> Option<Box<dyn Rule>> {
    let canonical = resolve_rule_name(name);
    RULES
        .iter()
        .find(|entry| entry.name == canonical)
        .map(|entry| (entry.ctor)(config))
}

/// Check whether the list contains the "all" keyword (case-insensitive).
fn contains_all_keyword(list: &[String]) -> bool {
    list.iter().any(|s| s.eq_ignore_ascii_case("all"))
}

/// Keep the rules selected by `enable`/`disable`.
///
/// An empty `enable` list means every rule. `disable` always wins, and
/// `disable = ["all"]` leaves only what `enable` names explicitly.
pub fn filter_rules(rules: Vec<Box<dyn Rule>>, global_config: &GlobalConfig) -> Vec<Box<dyn Rule>> {
    let resolve = |list: &[String]| -> HashSet<String> { list.iter().map(|s| resolve_rule_name(s)).collect() };
    let enabled = resolve(&global_config.enable);
    let disabled = resolve(&global_config.disable);

    let enable_all = global_config.enable.is_empty() || contains_all_keyword(&global_config.enable);
    let disable_all = contains_all_keyword(&global_config.disable);

    rules
        .into_iter()
        .filter(|rule| {
            let name = rule.name();
            if disable_all {
                return !global_config.enable.is_empty() && (enabled.contains(name) || enable_all);
            }
            (enable_all || enabled.contains(name)) && !disabled.contains(name)
        })
        .collect()
}

/// Rules for `config`, after applying `enable`/`disable`
pub fn enabled_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    filter_rules(all_rules(config), &config.global)
}
