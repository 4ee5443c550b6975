//! Handler for the `server` command.

use colored::*;

use mmlint_lib::exit_codes::exit;

/// Start the language server on stdio, or on a TCP port for debugging.
pub fn handle_server(port: Option<u16>, config: Option<String>) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}: Failed to start async runtime: {e}", "Error".red().bold());
            exit::tool_error();
        }
    };

    let result = runtime.block_on(async {
        match port {
            Some(port) => mmlint_lib::lsp::start_tcp_server(port, config.as_deref()).await,
            None => mmlint_lib::lsp::start_server(config.as_deref()).await,
        }
    });

    if let Err(e) = result {
        eprintln!("{}: Language server failed: {e}", "Error".red().bold());
        exit::tool_error();
    }
}
