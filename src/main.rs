// Use jemalloc for better memory allocation performance on Unix-like systems
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// Use mimalloc on Windows for better performance
#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli_types;
pub use cli_types::CheckArgs;

mod cli_utils;

mod commands;
mod file_processor;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::shells::Shell;
use core::error::Error;

use mmlint_lib::Theme;
use mmlint_lib::exit_codes::exit;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control colored output
    #[arg(long, global = true, default_value_t, value_enum)]
    color: Color,

    /// Path to configuration file
    #[arg(
        long,
        global = true,
        help = "Path to configuration file",
        conflicts_with = "no_config"
    )]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(
        long,
        global = true,
        help = "Ignore all configuration files and use built-in defaults"
    )]
    no_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Markdown files and print warnings/errors
    Check(CheckArgs),
    /// Print the decoration ranges of a document as JSON
    Annotate {
        /// File to annotate
        #[arg(required_unless_present = "stdin")]
        file: Option<String>,
        /// Read the document from stdin
        #[arg(long, conflicts_with = "file")]
        stdin: bool,
        /// Editor language id (defaults from the file extension, or markdown for stdin)
        #[arg(long)]
        language: Option<String>,
    },
    /// Print the decoration colours for a theme as JSON
    Stylesheet {
        /// Editor colour theme
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
    },
    /// Show information about a rule or list all rules
    Rule {
        /// Rule code or alias (optional, omit to list all rules)
        rule: Option<String>,
        /// Output format
        #[arg(long, short = 'o', value_name = "FORMAT", default_value_t, value_enum)]
        output_format: commands::rule::OutputFormat,
    },
    /// Initialize a new configuration file
    Init {
        /// Add a [tool.mmlint] section to pyproject.toml instead of writing .mmlint.toml
        #[arg(long, conflicts_with = "output")]
        pyproject: bool,
        /// Output file path (default: .mmlint.toml)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
    /// Start the Language Server Protocol server
    Server {
        /// TCP port to listen on (for debugging)
        #[arg(long)]
        port: Option<u16>,
        /// Use stdio for communication (default)
        #[arg(long, conflicts_with = "port")]
        stdio: bool,
        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,
        /// List available shells
        #[arg(long, short = 'l')]
        list: bool,
    },
}

#[derive(Clone, Default, ValueEnum)]
enum Color {
    #[default]
    Auto,
    Always,
    Never,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reset SIGPIPE to default behavior on Unix so piping to `head` etc. works correctly.
    // Without this, Rust ignores SIGPIPE and `println!` panics on broken pipe.
    #[cfg(unix)]
    {
        // SAFETY: restoring the default SIGPIPE disposition before any output is written
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();

    // Initialize logging from RUST_LOG, e.g. RUST_LOG=debug mmlint check ...
    let mut logger = env_logger::Builder::from_default_env();
    logger.format_timestamp(None).format_target(false);
    if matches!(cli.command, Commands::Server { verbose: true, .. }) {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.color {
        Color::Always => colored::control::set_override(true),
        Color::Never => colored::control::set_override(false),
        Color::Auto => colored::control::unset_override(),
    }

    let config_path = if cli.no_config { None } else { cli.config.as_deref() };

    let result = std::panic::catch_unwind(|| match cli.command {
        Commands::Check(ref args) => {
            commands::check::run_check(args, config_path, cli.no_config);
        }
        Commands::Annotate {
            ref file,
            stdin,
            ref language,
        } => {
            commands::annotate::handle_annotate(file.clone(), stdin, language.clone(), config_path, cli.no_config);
        }
        Commands::Stylesheet { theme } => {
            commands::stylesheet::handle_stylesheet(theme, config_path, cli.no_config);
        }
        Commands::Rule {
            ref rule,
            output_format,
        } => {
            commands::rule::handle_rule(rule.clone(), output_format);
        }
        Commands::Init { pyproject, ref output } => {
            commands::init::handle_init(pyproject, output.clone());
        }
        Commands::Server { port, stdio, .. } => {
            if stdio {
                log::debug!("Serving over stdio");
            }
            commands::server::handle_server(port, config_path.map(str::to_string));
        }
        Commands::Completions { shell, list } => {
            commands::completions::handle_completions(shell, list);
        }
    });
    if let Err(e) = result {
        eprintln!("[mmlint panic handler] Uncaught panic: {e:?}");
        exit::tool_error();
    } else {
        Ok(())
    }
}
