//! Configuration handling for the language server

use std::path::PathBuf;

use tower_lsp::lsp_types::MessageType;

use super::server::MmlintLanguageServer;
use crate::config::{CONFIG_FILE_NAMES, Config, SourcedConfig};

impl MmlintLanguageServer {
    /// Load the mmlint config file: the explicit `configPath` if the client set one,
    /// otherwise by discovery from the first workspace root.
    ///
    /// Failures fall back to the default configuration so the server keeps linting.
    pub(super) async fn load_configuration(&self, notify_client: bool) {
        let explicit_config_path = self.config.read().await.config_path.clone();
        let start_dir = self.workspace_roots.read().await.first().cloned();

        match Self::load_config_for_lsp(explicit_config_path.as_deref(), start_dir) {
            Ok(sourced) => {
                let loaded_files = sourced.loaded_files.clone();
                *self.mmlint_config.write().await = sourced.into();

                if loaded_files.is_empty() {
                    log::info!("Using default mmlint configuration (no config files found)");
                } else {
                    let message = format!("Loaded mmlint config from: {}", loaded_files.join(", "));
                    log::info!("{message}");
                    if notify_client {
                        self.client.log_message(MessageType::INFO, &message).await;
                    }
                }
            }
            Err(e) => {
                let message = format!("Failed to load mmlint config: {e}");
                log::warn!("{message}");
                if notify_client {
                    self.client.log_message(MessageType::WARNING, &message).await;
                }
                *self.mmlint_config.write().await = Config::default();
            }
        }
    }

    /// Reload the config file and tell the client about it
    pub(super) async fn reload_configuration(&self) {
        self.load_configuration(true).await;
    }

    pub(crate) fn load_config_for_lsp(
        config_path: Option<&str>,
        start_dir: Option<PathBuf>,
    ) -> Result<SourcedConfig, crate::config::ConfigError> {
        SourcedConfig::load_with_discovery(config_path, start_dir.as_deref(), false)
    }

    /// The config file merged with the client's settings, which take precedence.
    pub(crate) async fn effective_config(&self) -> Config {
        let mut config = self.mmlint_config.read().await.clone();
        self.config.read().await.lint.apply_to(&mut config.lint);
        config
    }

    /// Whether a changed file could alter the loaded configuration
    pub(super) fn is_config_file(path: &std::path::Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| CONFIG_FILE_NAMES.contains(&name))
    }
}
