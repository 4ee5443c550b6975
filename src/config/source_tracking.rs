use super::types::{Config, DecorationConfig, GlobalConfig, LintConfig, LintOverrides};

/// Configuration source with clear precedence hierarchy.
///
/// Precedence order (later sources override earlier ones):
/// - Default (0): Built-in defaults
/// - PyprojectToml (1): Project-level pyproject.toml
/// - ProjectConfig (2): Project-level .mmlint.toml or mmlint.toml
/// - Cli (3): Command-line flags and editor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in default configuration
    Default,
    /// Project-level configuration from pyproject.toml
    PyprojectToml,
    /// Project-level configuration from .mmlint.toml or mmlint.toml
    ProjectConfig,
    /// Command-line flags (highest precedence)
    Cli,
}

impl ConfigSource {
    fn precedence(self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::PyprojectToml => 1,
            ConfigSource::ProjectConfig => 2,
            ConfigSource::Cli => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigSource::Default => "default",
            ConfigSource::PyprojectToml => "pyproject.toml",
            ConfigSource::ProjectConfig => "project config",
            ConfigSource::Cli => "cli",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigOverride<T> {
    pub value: T,
    pub source: ConfigSource,
    pub file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SourcedValue<T> {
    pub value: T,
    pub source: ConfigSource,
    pub overrides: Vec<ConfigOverride<T>>,
}

impl<T: Clone> SourcedValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self {
            value: value.clone(),
            source,
            overrides: vec![ConfigOverride {
                value,
                source,
                file: None,
            }],
        }
    }

    /// Merges a new override into this SourcedValue based on source precedence.
    /// If the new source has higher or equal precedence, the value and source are updated,
    /// and the new override is added to the history.
    pub fn merge_override(&mut self, new_value: T, new_source: ConfigSource, new_file: Option<String>) {
        if new_source.precedence() >= self.source.precedence() {
            self.value = new_value.clone();
            self.source = new_source;
            self.overrides.push(ConfigOverride {
                value: new_value,
                source: new_source,
                file: new_file,
            });
        }
    }

    /// File that supplied the current value, if any
    pub fn file(&self) -> Option<&str> {
        self.overrides.last().and_then(|o| o.file.as_deref())
    }

    /// Where the current value came from: the file path, or the source name
    pub fn origin(&self) -> &str {
        self.file().unwrap_or(self.source.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SourcedGlobalConfig {
    pub enable: SourcedValue<Vec<String>>,
    pub disable: SourcedValue<Vec<String>>,
    pub exclude: SourcedValue<Vec<String>>,
    pub include: SourcedValue<Vec<String>>,
    pub respect_gitignore: SourcedValue<bool>,
    pub output_format: Option<SourcedValue<String>>,
}

impl Default for SourcedGlobalConfig {
    fn default() -> Self {
        let defaults = GlobalConfig::default();
        SourcedGlobalConfig {
            enable: SourcedValue::new(defaults.enable, ConfigSource::Default),
            disable: SourcedValue::new(defaults.disable, ConfigSource::Default),
            exclude: SourcedValue::new(defaults.exclude, ConfigSource::Default),
            include: SourcedValue::new(defaults.include, ConfigSource::Default),
            respect_gitignore: SourcedValue::new(defaults.respect_gitignore, ConfigSource::Default),
            output_format: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourcedLintConfig {
    pub check_indentation: SourcedValue<bool>,
    pub check_blank_line_before_admonition_content: SourcedValue<bool>,
    pub check_blank_line_before_list: SourcedValue<bool>,
}

impl Default for SourcedLintConfig {
    fn default() -> Self {
        let defaults = LintConfig::default();
        Self {
            check_indentation: SourcedValue::new(defaults.check_indentation, ConfigSource::Default),
            check_blank_line_before_admonition_content: SourcedValue::new(
                defaults.check_blank_line_before_admonition_content,
                ConfigSource::Default,
            ),
            check_blank_line_before_list: SourcedValue::new(
                defaults.check_blank_line_before_list,
                ConfigSource::Default,
            ),
        }
    }
}

impl SourcedLintConfig {
    /// One `key = value (origin)` line per flag, for debug output
    pub fn describe(&self) -> Vec<String> {
        [
            ("check-indentation", &self.check_indentation),
            (
                "check-blank-line-before-admonition-content",
                &self.check_blank_line_before_admonition_content,
            ),
            ("check-blank-line-before-list", &self.check_blank_line_before_list),
        ]
        .into_iter()
        .map(|(key, value)| format!("{key} = {} ({})", value.value, value.origin()))
        .collect()
    }

    pub fn apply(&mut self, overrides: &LintOverrides, source: ConfigSource, file: Option<&str>) {
        let file = file.map(str::to_string);
        if let Some(v) = overrides.check_indentation {
            self.check_indentation.merge_override(v, source, file.clone());
        }
        if let Some(v) = overrides.check_blank_line_before_admonition_content {
            self.check_blank_line_before_admonition_content
                .merge_override(v, source, file.clone());
        }
        if let Some(v) = overrides.check_blank_line_before_list {
            self.check_blank_line_before_list.merge_override(v, source, file);
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourcedDecorationConfig {
    pub enabled: SourcedValue<bool>,
    pub background: SourcedValue<bool>,
    pub gutter: SourcedValue<bool>,
}

impl Default for SourcedDecorationConfig {
    fn default() -> Self {
        let defaults = DecorationConfig::default();
        Self {
            enabled: SourcedValue::new(defaults.enabled, ConfigSource::Default),
            background: SourcedValue::new(defaults.background, ConfigSource::Default),
            gutter: SourcedValue::new(defaults.gutter, ConfigSource::Default),
        }
    }
}

/// Represents a config validation warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationWarning {
    pub message: String,
    pub rule: Option<String>,
    pub key: Option<String>,
}

/// Configuration with provenance tracking for values.
#[derive(Debug, Clone, Default)]
pub struct SourcedConfig {
    pub global: SourcedGlobalConfig,
    pub lint: SourcedLintConfig,
    pub decorations: SourcedDecorationConfig,
    pub loaded_files: Vec<String>,
    pub validation_warnings: Vec<ConfigValidationWarning>,
}

impl SourcedConfig {
    /// Layer a command-line rule selection on top of the loaded files.
    pub fn apply_cli_rules(&mut self, enable: Option<Vec<String>>, disable: Option<Vec<String>>) {
        if let Some(enable) = enable {
            self.global.enable.merge_override(enable, ConfigSource::Cli, None);
        }
        if let Some(disable) = disable {
            // CLI disables add to the configured ones
            let mut combined = self.global.disable.value.clone();
            for name in disable {
                if !combined.contains(&name) {
                    combined.push(name);
                }
            }
            self.global.disable.merge_override(combined, ConfigSource::Cli, None);
        }
    }

    pub fn apply_cli_exclude(&mut self, exclude: Vec<String>) {
        self.global.exclude.merge_override(exclude, ConfigSource::Cli, None);
    }

    pub fn apply_cli_lint(&mut self, overrides: &LintOverrides) {
        self.lint.apply(overrides, ConfigSource::Cli, None);
    }
}

impl From<SourcedConfig> for Config {
    fn from(sourced: SourcedConfig) -> Self {
        Config {
            global: GlobalConfig {
                enable: sourced.global.enable.value,
                disable: sourced.global.disable.value,
                exclude: sourced.global.exclude.value,
                include: sourced.global.include.value,
                respect_gitignore: sourced.global.respect_gitignore.value,
                output_format: sourced.global.output_format.map(|v| v.value),
            },
            lint: LintConfig {
                check_indentation: sourced.lint.check_indentation.value,
                check_blank_line_before_admonition_content: sourced
                    .lint
                    .check_blank_line_before_admonition_content
                    .value,
                check_blank_line_before_list: sourced.lint.check_blank_line_before_list.value,
            },
            decorations: DecorationConfig {
                enabled: sourced.decorations.enabled.value,
                background: sourced.decorations.background.value,
                gutter: sourced.decorations.gutter.value,
            },
        }
    }
}
