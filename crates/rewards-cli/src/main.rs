mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use rewards_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Rewards - customer reward points over purchase transactions

Usage:
  rewards <command>

Start here:
  rewards demo summary
  rewards check --help
  rewards summary <path>
";

const TOP_LEVEL_HELP: &str = "Rewards — customer reward points over purchase transactions

USAGE: rewards <command>

Try it:
  rewards demo summary                                    Preview per-customer totals on sample data
  rewards demo monthly                                    Preview monthly rewards on sample data
  rewards demo transactions                               Preview the grouped listing on sample data

Load your transactions:
  1. rewards check --help                                 Read the transaction schema and workflow details
  2. rewards check <path>                                 Validate a file without computing summaries
  3. rewards summary <path>                               Total reward points per customer

View reward reports:
  rewards summary <path>                                  Total points per customer
  rewards monthly <path>                                  Points per customer per calendar month
  rewards transactions <path>                             Transactions with points, grouped by month

Scope any report to a date window:
  rewards summary <path> --from 2025-01-01 --to 2025-06-30

Machine output:
  Add --json to any command for structured JSON output.

Want to ensure a clean first run, or having issues/errors?
  Run `rewards check --help` for schema and workflow guidance,
  or `rewards <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["summary", ..] => Some("summary"),
        ["monthly", ..] => Some("monthly"),
        ["transactions", ..] => Some("transactions"),
        ["check", ..] => Some("check"),
        ["demo", "summary", ..] => Some("demo summary"),
        ["demo", "monthly", ..] => Some("demo monthly"),
        ["demo", "transactions", ..] => Some("demo transactions"),
        ["demo", ..] => Some("demo"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
