//!
//! Shared line classifiers and helpers for mmlint rules.
//!
//! These are pure functions over a single line or a slice of lines; none of them keep state.

pub mod line_utils;
pub mod list_utils;
pub mod mkdocs_admonitions;
pub mod mkdocs_tabs;
pub mod range_utils;
pub mod regex_cache;
pub mod table_utils;

pub use line_utils::{indent_width, is_blank, leading_whitespace, split_lines};
