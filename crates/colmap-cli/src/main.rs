//! `colmap` command-line tool.

use clap::{ColorChoice, Parser};
use colmap_cli::logging::{LogConfig, LogFormat, init_logging};
use colmap_cli::summary::{print_fields, print_preview};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{MapResult, mapping_json, run_fields, run_map, run_preview};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Preview(args) => match run_preview(&args) {
            Ok(session) => {
                print_preview(&session);
                0
            }
            Err(error) => report(&error),
        },
        Command::Map(args) => match run_map(&args) {
            Ok(result) => print_map_result(&result),
            Err(error) => report(&error),
        },
        Command::Fields(args) => match run_fields(&args) {
            Ok(()) => 0,
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

fn print_map_result(result: &MapResult) -> i32 {
    print_fields(&result.session);
    match &result.outcome {
        Ok(assignments) => match &result.output {
            Some(path) => {
                println!("Mapping written to {}", path.display());
                0
            }
            None => match mapping_json(assignments) {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(error) => report(&error),
            },
        },
        Err(error) => {
            eprintln!("error: {error}");
            for name in &error.missing {
                eprintln!("- {name}");
            }
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
