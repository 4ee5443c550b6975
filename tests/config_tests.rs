use mmlint_lib::config::{Config, SourcedConfig};
use mmlint_lib::rules::enabled_rules;
use mmlint_lib::{lint, scan_document};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_config_file() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("test_config.toml");
    let config_content = r#"
[global]
disable = ["MM003"]
exclude = ["site/**"]
output-format = "concise"

[lint]
check-indentation = false
check-blank-line-before-list = true

[decorations]
gutter = false
"#;
    fs::write(&config_path, config_content).expect("Failed to write test config file");

    let config_path_str = config_path.to_str().expect("Path should be valid UTF-8");
    let sourced = SourcedConfig::load_with_discovery(Some(config_path_str), None, true);
    assert!(sourced.is_ok(), "Config loading should succeed. Error: {:?}", sourced.err());

    let sourced = sourced.unwrap();
    assert!(sourced.validation_warnings.is_empty());
    let config: Config = sourced.into();

    assert_eq!(config.global.disable, vec!["MM003"]);
    assert_eq!(config.global.exclude, vec!["site/**"]);
    assert_eq!(config.global.output_format.as_deref(), Some("concise"));
    assert!(!config.lint.check_indentation);
    assert!(config.lint.check_blank_line_before_list);
    assert!(!config.lint.check_blank_line_before_admonition_content);
    assert!(config.decorations.enabled);
    assert!(!config.decorations.gutter);
}

#[test]
fn test_loaded_config_drives_the_scan() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(".mmlint.toml");
    fs::write(
        &config_path,
        "[global]\ndisable = [\"list-marker-space\"]\n\n[lint]\ncheckBlankLineBeforeList = true\n",
    )
    .unwrap();

    let config: Config = SourcedConfig::load_with_discovery(None, Some(temp_dir.path()), false)
        .unwrap()
        .into();

    let content = "-item\n\n# Heading\n- item\n";
    let diagnostics = lint(content, &enabled_rules(&config));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "MM005");
    assert_eq!(diagnostics[0].line, 3);
}

#[test]
fn test_load_nonexistent_config() {
    let result = SourcedConfig::load_with_discovery(Some("nonexistent_config.toml"), None, true);
    let err = result.expect_err("Loading nonexistent config should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_isolated_mode_ignores_project_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(".mmlint.toml"), "[global]\ndisable = [\"all\"]\n").unwrap();

    let config: Config = SourcedConfig::load_with_discovery(None, Some(temp_dir.path()), true)
        .unwrap()
        .into();
    assert_eq!(config, Config::default());
    assert_eq!(scan_document("```\n", "markdown", &config).diagnostics.len(), 1);
}

#[test]
fn test_typo_in_config_is_reported_not_fatal() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("mmlint.toml");
    fs::write(&config_path, "[lint]\ncheck-indentaton = false\n").unwrap();

    let sourced = SourcedConfig::load_with_discovery(config_path.to_str(), None, false).unwrap();
    assert_eq!(sourced.validation_warnings.len(), 1);
    let config: Config = sourced.into();
    assert!(config.lint.check_indentation);
}
