//!
//! Configuration: the TOML model, file discovery, provenance and validation.
//!

mod loading;
pub mod registry;
mod source_tracking;
mod types;
pub mod validation;

pub use loading::{CONFIG_FILE_NAMES, find_config_file};
pub use source_tracking::{
    ConfigOverride, ConfigSource, ConfigValidationWarning, SourcedConfig, SourcedDecorationConfig,
    SourcedGlobalConfig, SourcedLintConfig, SourcedValue,
};
pub use types::{
    Config, ConfigError, DecorationConfig, GlobalConfig, LintConfig, LintOverrides, create_default_config,
    default_config_content,
};
