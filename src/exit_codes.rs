//! Process exit codes shared by every `mmlint` command.

/// No violations (or none that count under `--fail-on`)
pub const SUCCESS: i32 = 0;

/// Violations found
pub const VIOLATIONS_FOUND: i32 = 1;

/// Configuration, I/O or usage error
pub const TOOL_ERROR: i32 = 2;

/// Exit helpers
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR, VIOLATIONS_FOUND};

    pub fn success() -> ! {
        std::process::exit(SUCCESS)
    }

    pub fn violations_found() -> ! {
        std::process::exit(VIOLATIONS_FOUND)
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR)
    }
}
