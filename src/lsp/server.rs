//! Main Language Server Protocol server implementation for mmlint
//!
//! Documents are kept in memory with full text sync. Every open, change and save
//! re-scans the whole document and publishes the complete diagnostic set.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result as JsonRpcResult;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::config::{CONFIG_FILE_NAMES, Config};
use crate::lsp::types::MmlintLspConfig;

/// A document opened in the editor
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DocumentEntry {
    pub(crate) content: String,
    pub(crate) version: Option<i32>,
    /// Editor language id, used to decide whether the document is linted at all
    pub(crate) language_id: String,
}

#[derive(Clone)]
pub struct MmlintLanguageServer {
    pub(crate) client: Client,
    /// Settings sent by the client
    pub(crate) config: Arc<RwLock<MmlintLspConfig>>,
    /// Configuration loaded from `.mmlint.toml` and friends
    pub(crate) mmlint_config: Arc<RwLock<Config>>,
    pub(crate) documents: Arc<RwLock<HashMap<Url, DocumentEntry>>>,
    pub(crate) workspace_roots: Arc<RwLock<Vec<PathBuf>>>,
}

impl MmlintLanguageServer {
    pub fn new(client: Client, cli_config_path: Option<&str>) -> Self {
        let initial_config = MmlintLspConfig {
            config_path: cli_config_path.map(str::to_string),
            ..Default::default()
        };

        Self {
            client,
            config: Arc::new(RwLock::new(initial_config)),
            mmlint_config: Arc::new(RwLock::new(Config::default())),
            documents: Arc::new(RwLock::new(HashMap::new())),
            workspace_roots: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the client settings, keeping a `configPath` given on the command line
    /// unless the client names its own.
    async fn apply_client_settings(&self, mut settings: MmlintLspConfig) -> bool {
        let mut config = self.config.write().await;
        if settings.config_path.is_none() {
            settings.config_path = config.config_path.clone();
        }
        let config_path_changed = settings.config_path != config.config_path;
        *config = settings;
        config_path_changed
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for MmlintLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> JsonRpcResult<InitializeResult> {
        log::info!("Initializing mmlint Language Server");

        if let Some(options) = params.initialization_options
            && let Some(settings) = MmlintLspConfig::from_settings(options)
        {
            self.apply_client_settings(settings).await;
        }

        let mut roots = Vec::new();
        if let Some(workspace_folders) = params.workspace_folders {
            for folder in workspace_folders {
                if let Ok(path) = folder.uri.to_file_path() {
                    log::info!("Workspace root: {}", path.display());
                    roots.push(path);
                }
            }
        } else if let Some(root_uri) = params.root_uri
            && let Ok(path) = root_uri.to_file_path()
        {
            log::info!("Workspace root: {}", path.display());
            roots.push(path);
        }
        *self.workspace_roots.write().await = roots;

        self.load_configuration(false).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    will_save: Some(false),
                    will_save_wait_until: Some(false),
                    save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                        include_text: Some(false),
                    })),
                })),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "mmlint".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let version = env!("CARGO_PKG_VERSION");
        log::info!("mmlint Language Server v{version} initialized");
        self.client
            .log_message(MessageType::INFO, format!("mmlint v{version} Language Server started"))
            .await;

        let watchers: Vec<_> = CONFIG_FILE_NAMES
            .iter()
            .map(|name| FileSystemWatcher {
                glob_pattern: GlobPattern::String(format!("**/{name}")),
                kind: Some(WatchKind::all()),
            })
            .collect();
        let register_options = match serde_json::to_value(DidChangeWatchedFilesRegistrationOptions { watchers }) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to build file watcher registration: {e}");
                return;
            }
        };
        let registration = Registration {
            id: "mmlint-config-watcher".to_string(),
            method: "workspace/didChangeWatchedFiles".to_string(),
            register_options: Some(register_options),
        };
        if self.client.register_capability(vec![registration]).await.is_err() {
            log::debug!("Client does not support file watching capability");
        }
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        log::debug!("Configuration changed: {:?}", params.settings);

        let Some(settings) = MmlintLspConfig::from_settings(params.settings) else {
            log::debug!("No mmlint settings in configuration change");
            return;
        };

        if self.apply_client_settings(settings).await {
            self.reload_configuration().await;
        }
        self.relint_open_documents().await;
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        let config_changed = params
            .changes
            .iter()
            .filter_map(|change| change.uri.to_file_path().ok())
            .any(|path| Self::is_config_file(&path));

        if config_changed {
            log::info!("Config file changed, reloading");
            self.reload_configuration().await;
            self.relint_open_documents().await;
        }
    }

    async fn shutdown(&self) -> JsonRpcResult<()> {
        log::info!("Shutting down mmlint Language Server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        let entry = DocumentEntry {
            content: document.text,
            version: Some(document.version),
            language_id: document.language_id,
        };
        self.documents.write().await.insert(document.uri.clone(), entry);

        self.update_diagnostics(document.uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change carries the whole document
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };

        {
            let mut documents = self.documents.write().await;
            match documents.get_mut(&uri) {
                Some(entry) => {
                    entry.content = change.text;
                    entry.version = Some(version);
                }
                None => {
                    log::debug!("didChange for unopened document {uri}");
                    return;
                }
            }
        }

        self.update_diagnostics(uri).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(text) = params.text
            && let Some(entry) = self.documents.write().await.get_mut(&uri)
        {
            entry.content = text;
        }
        if self.documents.read().await.contains_key(&uri) {
            self.update_diagnostics(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);
        self.client
            .publish_diagnostics(params.text_document.uri, Vec::new(), None)
            .await;
    }
}
