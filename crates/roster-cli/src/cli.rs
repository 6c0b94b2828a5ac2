//! CLI argument definitions for the roster picker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::Gender;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Character roster picker - Draw a seeded random character from a roster sheet",
    long_about = "Draw one character from a roster CSV, subject to optional substring\n\
                  and gender filters, and emit its derived fields plus a sampled list\n\
                  of outfit variants. Equal seeds against an unchanged roster give\n\
                  equal outputs."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Pick one character and print its record.
    Pick(PickArgs),

    /// Show the schema resolved for a roster file.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct PickArgs {
    /// Path to the roster CSV (default: $ROSTER_FILE, else roster.csv
    /// beside the executable).
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Seed for the per-call random generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Gender filter.
    #[arg(long, value_enum, default_value = "any")]
    pub gender: GenderArg,

    /// Number of outfit values to emit.
    #[arg(long = "count", value_parser = clap::value_parser!(u8).range(1..=17), default_value_t = 1)]
    pub count: u8,

    /// Case-insensitive substring filter over the rule column.
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Output format for the picked record.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the roster CSV (default: $ROSTER_FILE, else roster.csv
    /// beside the executable).
    #[arg(long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,
}

/// CLI gender filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Any,
    Girl,
    Boy,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Any => Self::Any,
            GenderArg::Girl => Self::Girl,
            GenderArg::Boy => Self::Boy,
        }
    }
}

/// CLI record output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
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
