//! Empreendimento validation CLI.

use clap::{ColorChoice, Parser};
use empval_cli::logging::{LogConfig, LogFormat, init_logging};
use serde::Serialize;
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_options, run_rules, run_validate};
use crate::summary::{print_applied_rules, print_batch_summary, print_rule_options};

use empval_ingest::DecodeError;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let exit_code = match cli.command {
        Command::Validate(args) => match run_validate(&args) {
            Ok(report) => {
                if args.json {
                    print_json(&report.results);
                } else {
                    print_batch_summary(&report);
                }
                if report.has_invalid() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                // Decode failures get their own exit code so callers can
                // tell a rejected payload from records that failed rules.
                if error.downcast_ref::<DecodeError>().is_some() {
                    2
                } else {
                    1
                }
            }
        },
        Command::Rules(args) => {
            let applied = run_rules(&args);
            if args.json {
                print_json(&applied);
            } else {
                print_applied_rules(&applied);
            }
            0
        }
        Command::Options(args) => {
            let options = run_options();
            if args.json {
                print_json(&options);
            } else {
                print_rule_options(&options);
            }
            0
        }
    };
    std::process::exit(exit_code);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(error) => eprintln!("error: failed to serialize output: {error}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
