//! Command handlers for the `mmlint` binary.

pub mod annotate;
pub mod check;
pub mod completions;
pub mod init;
pub mod rule;
pub mod server;
pub mod stylesheet;
