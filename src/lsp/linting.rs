//! Linting and custom requests for the language server

use futures::future::join_all;
use tower_lsp::jsonrpc::{Error as JsonRpcError, Result as JsonRpcResult};
use tower_lsp::lsp_types::{Diagnostic, Url};

use super::server::{DocumentEntry, MmlintLanguageServer};
use super::types::{AnnotationsParams, StylesheetParams, annotations_to_utf16, diagnostic_to_lsp};
use crate::annotations::Annotations;
use crate::theme::{Stylesheet, compute_stylesheet};
use crate::utils::split_lines;
use crate::{ScanOutput, scan_document};

impl MmlintLanguageServer {
    async fn scan_entry(&self, entry: &DocumentEntry) -> ScanOutput {
        let config = self.effective_config().await;
        scan_document(&entry.content, &entry.language_id, &config)
    }

    /// Lint an open document and convert the result to LSP diagnostics.
    ///
    /// Unknown documents and ineligible languages lint clean.
    pub(crate) async fn lint_document(&self, uri: &Url) -> Vec<Diagnostic> {
        let Some(entry) = self.documents.read().await.get(uri).cloned() else {
            return Vec::new();
        };

        let output = self.scan_entry(&entry).await;
        let lines = split_lines(&entry.content);
        output
            .diagnostics
            .iter()
            .map(|d| diagnostic_to_lsp(d, lines.get(d.line).copied().unwrap_or("")))
            .collect()
    }

    /// Re-scan a document and publish its full diagnostic set
    pub(super) async fn update_diagnostics(&self, uri: Url) {
        let version = self.documents.read().await.get(&uri).and_then(|entry| entry.version);
        let diagnostics = self.lint_document(&uri).await;
        log::debug!("Publishing {} diagnostics for {uri}", diagnostics.len());
        self.client.publish_diagnostics(uri, diagnostics, version).await;
    }

    /// Re-lint every open document, e.g. after a settings or config file change
    pub(super) async fn relint_open_documents(&self) {
        let uris: Vec<Url> = self.documents.read().await.keys().cloned().collect();
        let tasks = uris.into_iter().map(|uri| {
            let server = self.clone();
            async move { server.update_diagnostics(uri).await }
        });
        join_all(tasks).await;
    }

    /// `mmlint/annotations`: decoration ranges for an open document, in UTF-16 columns
    pub async fn annotations(&self, params: AnnotationsParams) -> JsonRpcResult<Annotations> {
        let Some(entry) = self.documents.read().await.get(&params.uri).cloned() else {
            return Err(JsonRpcError::invalid_params(format!("Document not open: {}", params.uri)));
        };

        let output = self.scan_entry(&entry).await;
        let lines = split_lines(&entry.content);
        Ok(annotations_to_utf16(output.annotations, &lines))
    }

    /// `mmlint/stylesheet`: decoration colours for the client's theme
    pub async fn stylesheet(&self, params: StylesheetParams) -> JsonRpcResult<Stylesheet> {
        let config = self.mmlint_config.read().await;
        Ok(compute_stylesheet(&config.decorations, params.theme))
    }
}
