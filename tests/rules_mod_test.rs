use mmlint_lib::config::{Config, GlobalConfig};
use mmlint_lib::rules::{all_rules, create_rule_by_name, enabled_rules, filter_rules};
use std::collections::HashSet;

fn names(rules: &[Box<dyn mmlint_lib::Rule>]) -> HashSet<&'static str> {
    rules.iter().map(|r| r.name()).collect()
}

#[test]
fn test_all_rules_returns_all_rules() {
    let rules = all_rules(&Config::default());
    assert_eq!(rules.len(), 9);

    let aliases: HashSet<&str> = rules.iter().map(|r| r.alias()).collect();
    assert_eq!(aliases.len(), 9, "aliases must be unique");
    assert!(rules.iter().all(|r| !r.description().is_empty()));
}

#[test]
fn test_filter_rules_with_empty_config() {
    let filtered = filter_rules(all_rules(&Config::default()), &GlobalConfig::default());
    assert_eq!(filtered.len(), 9);
}

#[test]
fn test_filter_rules_enable_and_disable() {
    let global = GlobalConfig {
        enable: vec!["MM001".to_string(), "tab-syntax".to_string(), "MM008".to_string()],
        disable: vec!["mm008".to_string()],
        ..GlobalConfig::default()
    };
    let filtered = filter_rules(all_rules(&Config::default()), &global);
    assert_eq!(names(&filtered), HashSet::from(["MM001", "MM002"]));
}

#[test]
fn test_disable_all_keeps_explicit_enables() {
    let global = GlobalConfig {
        enable: vec!["unclosed-math-block".to_string()],
        disable: vec!["all".to_string()],
        ..GlobalConfig::default()
    };
    let filtered = filter_rules(all_rules(&Config::default()), &global);
    assert_eq!(names(&filtered), HashSet::from(["MM009"]));

    let mut config = Config::default();
    config.global.disable = vec!["ALL".to_string()];
    assert!(enabled_rules(&config).is_empty());
}

#[test]
fn test_create_rule_by_name_accepts_codes_and_aliases() {
    let config = Config::default();
    assert_eq!(create_rule_by_name("MM004", &config).map(|r| r.name()), Some("MM004"));
    assert_eq!(create_rule_by_name("mm004", &config).map(|r| r.name()), Some("MM004"));
    assert_eq!(
        create_rule_by_name("table-header-separator", &config).map(|r| r.name()),
        Some("MM004")
    );
    assert!(create_rule_by_name("MD013", &config).is_none());
}
