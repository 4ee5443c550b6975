use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Represents the complete configuration loaded from .mmlint.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Toggles for the optional checks
    #[serde(default)]
    pub lint: LintConfig,

    /// Editor decoration layers
    #[serde(default)]
    pub decorations: DecorationConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Enabled rules (codes or aliases). Empty means all.
    #[serde(default)]
    pub enable: Vec<String>,

    /// Disabled rules (codes or aliases)
    #[serde(default)]
    pub disable: Vec<String>,

    /// Files to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Files to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Respect .gitignore files when scanning directories
    #[serde(default = "default_true", alias = "respect_gitignore")]
    pub respect_gitignore: bool,

    /// Output format for linting results (e.g., "text", "json", "github")
    #[serde(skip_serializing_if = "Option::is_none", alias = "output_format")]
    pub output_format: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enable: Vec::new(),
            disable: Vec::new(),
            exclude: Vec::new(),
            include: Vec::new(),
            respect_gitignore: true,
            output_format: None,
        }
    }
}

/// Switches for the checks that are not always on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LintConfig {
    /// MM006: admonition and tab bodies must be indented
    #[serde(alias = "checkIndentation", alias = "check_indentation")]
    pub check_indentation: bool,

    /// MM007: admonition content must follow a blank line
    #[serde(
        alias = "checkBlankLineBeforeAdmonitionContent",
        alias = "check_blank_line_before_admonition_content"
    )]
    pub check_blank_line_before_admonition_content: bool,

    /// MM005: also require a blank line between a heading, rule or closing fence and a list
    #[serde(alias = "checkBlankLineBeforeList", alias = "check_blank_line_before_list")]
    pub check_blank_line_before_list: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            check_indentation: true,
            check_blank_line_before_admonition_content: false,
            check_blank_line_before_list: false,
        }
    }
}

/// Partial [`LintConfig`], as sent by editors or given on the command line.
///
/// Missing keys leave the current value alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LintOverrides {
    #[serde(alias = "check-indentation", alias = "check_indentation")]
    pub check_indentation: Option<bool>,

    #[serde(
        alias = "check-blank-line-before-admonition-content",
        alias = "check_blank_line_before_admonition_content"
    )]
    pub check_blank_line_before_admonition_content: Option<bool>,

    #[serde(alias = "check-blank-line-before-list", alias = "check_blank_line_before_list")]
    pub check_blank_line_before_list: Option<bool>,
}

impl LintOverrides {
    pub fn is_empty(&self) -> bool {
        self.check_indentation.is_none()
            && self.check_blank_line_before_admonition_content.is_none()
            && self.check_blank_line_before_list.is_none()
    }

    pub fn apply_to(&self, lint: &mut LintConfig) {
        if let Some(v) = self.check_indentation {
            lint.check_indentation = v;
        }
        if let Some(v) = self.check_blank_line_before_admonition_content {
            lint.check_blank_line_before_admonition_content = v;
        }
        if let Some(v) = self.check_blank_line_before_list {
            lint.check_blank_line_before_list = v;
        }
    }
}

/// Which decoration layers a consumer draws
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DecorationConfig {
    pub enabled: bool,
    pub background: bool,
    pub gutter: bool,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            background: true,
            gutter: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError { path: String, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

/// Content written by `mmlint init`
pub fn default_config_content() -> String {
    r#"# mmlint configuration file
# Checks MkDocs Material syntax: admonitions, content tabs, lists, tables,
# code fences and math blocks.

[global]
# Rules to disable, by code or alias
# disable = ["MM005", "blank-line-after-admonition-header"]

# Run only these rules (all rules run when empty)
# enable = ["MM001", "MM002"]

# Files to exclude from directory walks
exclude = [".git", ".github", "node_modules", "site", "venv", ".venv"]

# Respect .gitignore files when scanning directories
respect-gitignore = true

[lint]
# Admonition and tab bodies must be indented by 4 spaces or a tab
check-indentation = true

# Admonition content must be preceded by a blank line
check-blank-line-before-admonition-content = false

# Also require a blank line between a heading, horizontal rule or closing fence and a list
check-blank-line-before-list = false

[decorations]
enabled = true
background = true
gutter = true
"#
    .to_string()
}

/// Create a default configuration file at the specified path
///
/// Refuses to overwrite an existing file.
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    fs::write(path, default_config_content()).map_err(|err| ConfigError::IoError {
        source: err,
        path: path.to_string(),
    })
}
