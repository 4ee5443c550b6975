use super::source_tracking::{ConfigSource, SourcedConfig};
use super::types::{ConfigError, LintOverrides};
use super::validation::validate_config_table;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names, in priority order within one directory
pub const CONFIG_FILE_NAMES: &[&str] = &[".mmlint.toml", "mmlint.toml", "pyproject.toml"];

const PYPROJECT_SECTION: &str = "[tool.mmlint";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFragment {
    global: GlobalFragment,
    lint: LintOverrides,
    decorations: DecorationFragment,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct GlobalFragment {
    enable: Option<Vec<String>>,
    disable: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    include: Option<Vec<String>>,
    #[serde(alias = "respect_gitignore")]
    respect_gitignore: Option<bool>,
    #[serde(alias = "output_format")]
    output_format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DecorationFragment {
    enabled: Option<bool>,
    background: Option<bool>,
    gutter: Option<bool>,
}

fn is_pyproject(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == "pyproject.toml")
}

fn pyproject_has_mmlint_section(path: &Path) -> bool {
    fs::read_to_string(path).is_ok_and(|content| content.contains(PYPROJECT_SECTION))
}

/// Walk up from `start_dir` looking for a config file.
///
/// Stops at the filesystem root or at the first directory containing `.git`.
/// A `pyproject.toml` only counts when it has a `[tool.mmlint]` table.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);

    while let Some(dir) = current {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                continue;
            }
            if is_pyproject(&candidate) && !pyproject_has_mmlint_section(&candidate) {
                continue;
            }
            log::debug!("Found config file: {}", candidate.display());
            return Some(candidate);
        }

        if dir.join(".git").exists() {
            log::debug!("Stopping config discovery at project root {}", dir.display());
            break;
        }
        current = dir.parent();
    }

    None
}

impl SourcedConfig {
    /// Load configuration from an explicit file, or by discovery from `start_dir`
    /// (the current directory when `None`).
    ///
    /// With `skip_auto_discovery`, only an explicit `config_path` is read.
    pub fn load_with_discovery(
        config_path: Option<&str>,
        start_dir: Option<&Path>,
        skip_auto_discovery: bool,
    ) -> Result<Self, ConfigError> {
        let mut sourced = SourcedConfig::default();

        if let Some(path) = config_path {
            let path = Path::new(path);
            if !path.exists() {
                return Err(ConfigError::IoError {
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                    path: path.display().to_string(),
                });
            }
            sourced.load_file(path)?;
            return Ok(sourced);
        }

        if skip_auto_discovery {
            log::debug!("Skipping config discovery");
            return Ok(sourced);
        }

        let start = match start_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().map_err(|source| ConfigError::IoError {
                source,
                path: ".".to_string(),
            })?,
        };

        if let Some(found) = find_config_file(&start) {
            sourced.load_file(&found)?;
        } else {
            log::debug!("No config file found from {}", start.display());
        }

        Ok(sourced)
    }

    /// Parse one config file and layer it over the current values.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path_str.clone(),
        })?;
        self.load_str(&content, path)
    }

    /// Like [`load_file`](Self::load_file), with the file content already read.
    pub fn load_str(&mut self, content: &str, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let parse_error = |message: String| ConfigError::ParseError {
            path: path_str.clone(),
            message,
        };

        let mut table: toml::Table = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let source = if is_pyproject(path) {
            let tool_section = table
                .remove("tool")
                .and_then(|tool| match tool {
                    toml::Value::Table(mut tool) => tool.remove("mmlint"),
                    _ => None,
                })
                .and_then(|section| match section {
                    toml::Value::Table(section) => Some(section),
                    _ => None,
                });
            let Some(section) = tool_section else {
                log::debug!("{path_str} has no [tool.mmlint] table");
                return Ok(());
            };
            table = section;
            ConfigSource::PyprojectToml
        } else {
            ConfigSource::ProjectConfig
        };

        let warnings = validate_config_table(&table, &path_str);
        for warning in &warnings {
            log::warn!("{}", warning.message);
        }
        self.validation_warnings.extend(warnings);

        let fragment: ConfigFragment = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| parse_error(e.to_string()))?;
        self.apply_fragment(fragment, source, &path_str);
        self.loaded_files.push(path_str.clone());
        log::debug!("Loaded config from {path_str}");
        Ok(())
    }

    fn apply_fragment(&mut self, fragment: ConfigFragment, source: ConfigSource, file: &str) {
        let file = Some(file.to_string());
        let global = fragment.global;
        if let Some(v) = global.enable {
            self.global.enable.merge_override(v, source, file.clone());
        }
        if let Some(v) = global.disable {
            self.global.disable.merge_override(v, source, file.clone());
        }
        if let Some(v) = global.exclude {
            self.global.exclude.merge_override(v, source, file.clone());
        }
        if let Some(v) = global.include {
            self.global.include.merge_override(v, source, file.clone());
        }
        if let Some(v) = global.respect_gitignore {
            self.global.respect_gitignore.merge_override(v, source, file.clone());
        }
        if let Some(v) = global.output_format {
            match &mut self.global.output_format {
                Some(existing) => existing.merge_override(v, source, file.clone()),
                None => self.global.output_format = Some(super::SourcedValue::new(v, source)),
            }
        }

        self.lint.apply(&fragment.lint, source, file.as_deref());

        let decorations = fragment.decorations;
        if let Some(v) = decorations.enabled {
            self.decorations.enabled.merge_override(v, source, file.clone());
        }
        if let Some(v) = decorations.background {
            self.decorations.background.merge_override(v, source, file.clone());
        }
        if let Some(v) = decorations.gutter {
            self.decorations.gutter.merge_override(v, source, file);
        }
    }
}
