//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use formwork_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "formwork",
    version,
    about = "Render and validate HTML forms described in TOML",
    long_about = "Render and validate HTML forms described in TOML.\n\n\
                  Submitted data is a JSON object mapping each field name to a\n\
                  value or a list of values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More output with -v (info) and -vv (debug), less with -q.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: Color,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Logging flags shared by every command.
#[derive(Args)]
pub struct LogArgs {
    /// Log level, overriding -v/-q and `RUST_LOG`.
    #[arg(long = "log-level", value_enum, global = true)]
    pub level: Option<LogLevelArg>,

    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Include submitted field values in logs.
    #[arg(long = "log-data", global = true)]
    pub data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a form definition as HTML.
    Render(RenderArgs),

    /// Check submitted data against a form definition.
    Validate(ValidateArgs),

    /// List the element kinds and their ancestors.
    Kinds,
}

#[derive(Args)]
pub struct RenderArgs {
    /// TOML form definition.
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// JSON data to populate the form with.
    #[arg(long, value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Validate first so that error lists are rendered.
    #[arg(long)]
    pub validate: bool,

    /// Message locale, replacing the one in the definition.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// TOML form definition.
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// JSON data to validate.
    #[arg(long, value_name = "DATA")]
    pub data: PathBuf,

    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Message locale, replacing the one in the definition.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
