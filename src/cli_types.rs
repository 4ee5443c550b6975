use clap::{Args, ValueEnum};

/// Fail-on mode determines which severity triggers exit code 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FailOn {
    /// Exit 1 on any violation (warning or error)
    #[default]
    Any,
    /// Exit 1 on warning or error severity violations
    Warning,
    /// Exit 1 only on error-severity violations
    Error,
    /// Always exit 0
    Never,
}

impl FailOn {
    pub fn should_fail(self, has_warnings: bool, has_errors: bool) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::Error => has_errors,
            FailOn::Warning | FailOn::Any => has_warnings || has_errors,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Files or directories to lint (defaults to the current directory)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Disable specific rules (comma-separated codes or aliases)
    #[arg(short, long)]
    pub disable: Option<String>,

    /// Enable only specific rules (comma-separated codes or aliases)
    #[arg(short, long)]
    pub enable: Option<String>,

    /// Exclude specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Disable all exclude patterns (lint all files regardless of exclude configuration)
    #[arg(long, help = "Disable all exclude patterns")]
    pub no_exclude: bool,

    /// Include only specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub include: Option<String>,

    /// Respect .gitignore files when scanning directories
    /// When not specified, uses config file value (default: true)
    #[arg(
        long,
        num_args(0..=1),
        require_equals(true),
        default_missing_value = "true",
        help = "Respect .gitignore files when scanning directories (does not apply to explicitly provided paths)"
    )]
    pub respect_gitignore: Option<bool>,

    /// Require admonition and tab bodies to be indented by 4 spaces or a tab
    #[arg(long, value_name = "BOOL")]
    pub check_indentation: Option<bool>,

    /// Require a blank line between an admonition header and its content
    #[arg(long, value_name = "BOOL")]
    pub check_blank_line_before_admonition_content: Option<bool>,

    /// Also require a blank line between a heading, horizontal rule or closing fence and a list
    #[arg(long, value_name = "BOOL")]
    pub check_blank_line_before_list: Option<bool>,

    /// Output format for linting results (default: text).
    ///
    /// Precedence: --output-format > config file > text
    #[arg(long, short = 'o', value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Show statistics summary of rule violations
    #[arg(long)]
    pub statistics: bool,

    /// Print diagnostics, but nothing else
    #[arg(short, long, help = "Print diagnostics, but nothing else")]
    pub quiet: bool,

    /// Disable all output (but still exit with status code upon detecting diagnostics)
    #[arg(
        short,
        long,
        help = "Disable all output (but still exit with status code upon detecting diagnostics)"
    )]
    pub silent: bool,

    /// Read from stdin instead of files
    #[arg(long, help = "Read from stdin instead of files")]
    pub stdin: bool,

    /// Filename to use for stdin input (for context and error messages)
    #[arg(long, help = "Filename to use when reading from stdin (e.g., README.md)")]
    pub stdin_filename: Option<String>,

    /// Control when to exit with code 1: any (default), warning, error, or never
    #[arg(
        long,
        value_enum,
        default_value_t,
        help = "Exit code behavior: 'any' (default) exits 1 on any violation, 'warning' on warning+error, 'error' only on errors, 'never' always exits 0"
    )]
    pub fail_on: FailOn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic with file, line, column, severity, rule and message (default)
    Text,
    /// Minimal: file:line:col rule message
    Concise,
    /// JSON array of all diagnostics (collected across files)
    Json,
    /// One JSON object per diagnostic (streaming)
    JsonLines,
    /// GitHub Actions annotation format (::warning/::error)
    #[value(name = "github")]
    GitHub,
}

impl From<OutputFormat> for mmlint_lib::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Concise => Self::Concise,
            OutputFormat::Json => Self::Json,
            OutputFormat::JsonLines => Self::JsonLines,
            OutputFormat::GitHub => Self::GitHub,
        }
    }
}
