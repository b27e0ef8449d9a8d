//! CLI argument definitions for the column mapper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use colmap_cli::assign::AssignSpec;

#[derive(Parser)]
#[command(
    name = "colmap",
    version,
    about = "Map the columns of a CSV file onto named target fields",
    long_about = "Map the columns of a CSV file onto named target fields.\n\n\
                  Columns are addressed by spreadsheet-style codes (A, B, ..., AA).\n\
                  Field definitions are read from a TOML schema; the accepted\n\
                  mapping is written as JSON ({field: column_index})."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values from the input file to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one page of columns with their codes and sample values.
    Preview(PreviewArgs),

    /// Assign columns to fields, validate and emit the mapping.
    Map(MapArgs),

    /// List the fields defined in a schema.
    Fields(FieldsArgs),
}

/// Header row handling shared by commands that read a CSV file.
#[derive(Args, Clone, Copy, Default)]
pub struct HeaderArgs {
    /// Treat the first row as headers.
    #[arg(long = "header", conflicts_with = "no_header")]
    pub header: bool,

    /// Treat every row as data.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// CSV file to preview.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Page to show (1-based).
    #[arg(long = "page", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Columns per page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    #[command(flatten)]
    pub header: HeaderArgs,
}

#[derive(Parser)]
pub struct MapArgs {
    /// CSV file whose columns are mapped.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// TOML schema with the target fields.
    #[arg(long = "fields", value_name = "TOML")]
    pub fields: PathBuf,

    /// Drop a column onto a field, e.g. `--assign email=C`. Repeatable.
    #[arg(long = "assign", value_name = "FIELD=CODE")]
    pub assign: Vec<AssignSpec>,

    /// JSON file with recorded gesture events to replay.
    #[arg(long = "events", value_name = "JSON")]
    pub events: Option<PathBuf>,

    /// Write the accepted mapping to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Columns per page (overrides the schema).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Do not seed assignments from matching headers.
    #[arg(long = "no-auto-match")]
    pub no_auto_match: bool,

    #[command(flatten)]
    pub header: HeaderArgs,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// TOML schema with the target fields.
    #[arg(long = "fields", value_name = "TOML")]
    pub fields: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
