//! Language Server Protocol implementation for mmlint
//!
//! Publishes diagnostics for open Markdown documents and answers two custom
//! requests used by editor extensions to draw decorations:
//! `mmlint/annotations` and `mmlint/stylesheet`.
//!
//! Started with `mmlint server`.

mod configuration;
mod linting;
pub mod server;
pub mod types;


pub use server::MmlintLanguageServer;
pub use types::{AnnotationsParams, MmlintLspConfig, StylesheetParams, diagnostic_to_lsp};

use anyhow::Result;
use tokio::net::TcpListener;
use tower_lsp::{ClientSocket, LspService, Server};

/// Method name of the annotations request
pub const ANNOTATIONS_METHOD: &str = "mmlint/annotations";

/// Method name of the stylesheet request
pub const STYLESHEET_METHOD: &str = "mmlint/stylesheet";

/// Build the service with the custom requests registered
pub fn build_service(config_path: Option<String>) -> (LspService<MmlintLanguageServer>, ClientSocket) {
    LspService::build(move |client| MmlintLanguageServer::new(client, config_path.as_deref()))
        .custom_method(ANNOTATIONS_METHOD, MmlintLanguageServer::annotations)
        .custom_method(STYLESHEET_METHOD, MmlintLanguageServer::stylesheet)
        .finish()
}

/// Start the Language Server Protocol server on stdio
pub async fn start_server(config_path: Option<&str>) -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = build_service(config_path.map(str::to_string));

    log::info!("Starting mmlint Language Server Protocol server");

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}

/// Start the LSP server over TCP (useful for debugging)
pub async fn start_tcp_server(port: u16, config_path: Option<&str>) -> Result<()> {
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    log::info!("mmlint LSP server listening on 127.0.0.1:{port}");

    let config_path_owned = config_path.map(str::to_string);

    loop {
        let (stream, _) = listener.accept().await?;
        let (service, socket) = build_service(config_path_owned.clone());

        tokio::spawn(async move {
            let (read, write) = tokio::io::split(stream);
            Server::new(read, write, socket).serve(service).await;
        });
    }
}
