//! The `formwork` command line tool.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use formwork_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, ReportFormatArg};
use crate::commands::{run_kinds, run_render, run_validate};
use crate::summary::{print_report, print_report_json};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one command. Invalid submissions exit with failure.
fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Render(args) => {
            println!("{}", run_render(&args)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(args) => {
            let result = run_validate(&args)?;
            match args.format {
                ReportFormatArg::Table => {
                    print_report(&args.form, &result.report, &result.unknown_names);
                }
                ReportFormatArg::Json => {
                    print_report_json(&result.report, &result.unknown_names)?;
                }
            }
            if result.report.is_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Kinds => {
            run_kinds();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Explicit level flags take precedence over `RUST_LOG`, which takes
/// precedence over the default `warn`.
fn log_config(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log.level.is_some();
    let level = cli
        .log
        .level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log.file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: !explicit,
        ..LogConfig::default()
    }
    .with_level_filter(level)
    .with_format(cli.log.format.into())
    .with_log_file(cli.log.file.clone())
    .with_log_data(cli.log.data)
    .with_ansi(with_ansi)
}
