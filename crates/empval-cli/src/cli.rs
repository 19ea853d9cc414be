//! CLI argument definitions for the empreendimento validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "empval",
    version,
    about = "Valida empreendimentos contra as regras de cidade e construtora",
    long_about = "Validate real-estate development records against city and\n\
                  builder business rules.\n\n\
                  Input is a JSON array of records; results are per-record,\n\
                  with Portuguese violation messages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a batch of records from a JSON file.
    Validate(ValidateArgs),

    /// Preview which rules apply to a city/builder combination.
    Rules(RulesArgs),

    /// List the known city and builder keys.
    Options(OptionsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to a JSON file containing an array of records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the per-record results as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// City to preview rules for (accents and case are ignored).
    #[arg(long = "cidade", value_name = "CIDADE")]
    pub cidade: Option<String>,

    /// Builder to preview rules for (accents and case are ignored).
    #[arg(long = "construtora", value_name = "CONSTRUTORA")]
    pub construtora: Option<String>,

    /// Print the preview as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// Print the listings as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
