//! Command-line interface for logsift.
//!
//! Four core commands, one per log source plus a health probe:
//! - `show`: unified logs for a named source
//! - `crashes`: crash reports from the DiagnosticReports directories
//! - `packages`: Homebrew/package-manager logs
//! - `check`: platform compatibility probes

mod commands;

pub use commands::*;

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::error::Result;
use crate::model::LogSource;

/// Extract structured records from macOS logs and diagnostic files.
#[derive(Debug, Parser)]
#[command(name = "logsift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for records.
    #[arg(short = 'o', long, global = true, default_value = "text", env = "LOGSIFT_OUTPUT")]
    pub output: OutputFormat,

    /// Output as JSON (shorthand for -o json).
    #[arg(long, global = true, env = "LOGSIFT_JSON")]
    pub json: bool,

    /// Enable verbose diagnostics.
    #[arg(short = 'v', long, global = true, env = "LOGSIFT_VERBOSE")]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true, env = "LOGSIFT_QUIET")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "LOGSIFT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, global = true, default_value = "text", env = "LOGSIFT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to a custom configuration file.
    #[arg(long, global = true, env = "LOGSIFT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Get the effective output format.
    #[must_use]
    pub fn effective_output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show unified logs for a named source.
    #[command(alias = "logs")]
    Show(ShowArgs),

    /// List crash reports, newest first.
    #[command(alias = "cr")]
    Crashes(CrashesArgs),

    /// List package-manager log entries.
    #[command(alias = "pkg")]
    Packages(PackagesArgs),

    /// Check platform compatibility.
    Check,

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the show command.
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Log source to query.
    #[arg(default_value = "system")]
    pub source: SourceArg,

    /// Time window passed to `log show --last` (e.g. 15m, 1h, 24h).
    #[arg(short = 'l', long = "last", env = "LOGSIFT_TIME_PERIOD")]
    pub last: Option<String>,

    /// Custom predicate, overriding the source preset. Passed through to
    /// `log show` verbatim.
    #[arg(short = 'p', long)]
    pub predicate: Option<String>,

    /// Maximum number of records.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the crashes command.
#[derive(Debug, clap::Args)]
pub struct CrashesArgs {
    /// Maximum number of reports.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Directories to search instead of the DiagnosticReports defaults.
    /// May be given more than once.
    #[arg(short = 'd', long = "dir")]
    pub dirs: Vec<PathBuf>,
}

/// Arguments for the packages command.
#[derive(Debug, clap::Args)]
pub struct PackagesArgs {
    /// Maximum number of entries.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Directories to search instead of the Homebrew defaults.
    /// May be given more than once.
    #[arg(short = 'd', long = "dir")]
    pub dirs: Vec<PathBuf>,
}

/// Arguments for the completions command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Log source argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceArg {
    /// All system logs.
    #[default]
    System,
    /// Kernel process logs.
    Kernel,
    /// Authentication events.
    Auth,
    /// Hardware events (keyword-filtered kernel logs).
    Hardware,
    /// Power management subsystem.
    Power,
    /// Scheduler/launchd activity.
    Scheduler,
    /// Boot-related events.
    Boot,
}

impl From<SourceArg> for LogSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::System => Self::System,
            SourceArg::Kernel => Self::Kernel,
            SourceArg::Auth => Self::Auth,
            SourceArg::Hardware => Self::Hardware,
            SourceArg::Power => Self::Power,
            SourceArg::Scheduler => Self::Scheduler,
            SourceArg::Boot => Self::Boot,
        }
    }
}

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Tab-separated values.
    Tsv,
    /// Compact single-line output.
    Compact,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// Structured JSON format.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with full details.
    Pretty,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    Powershell,
    /// Elvish shell.
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let shell: Shell = shell.into();
    generate(shell, &mut cmd, "logsift", &mut io::stdout());
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match &cli.command {
        Commands::Show(args) => commands::show::run(&cli, args, &config),
        Commands::Crashes(args) => commands::crashes::run(&cli, args, &config),
        Commands::Packages(args) => commands::packages::run(&cli, args, &config),
        Commands::Check => commands::check::run(&cli),
        Commands::Completions(args) => {
            generate_completions(args.shell);
            Ok(())
        }
    }
}

/// Initialize tracing from the global flags. Diagnostics go to stderr so
/// record output on stdout stays machine-readable.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::EnvFilter;

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        cli.log_level.to_filter_string()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("logsift={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = match cli.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    // A second init (e.g. in tests) is harmless.
    let _ = result;
}
