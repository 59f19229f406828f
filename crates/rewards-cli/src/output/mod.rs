mod check_text;
mod error_text;
mod format;
mod json;
mod mode;
mod monthly_text;
mod summary_text;
mod transactions_text;

use std::io;

use rewards_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_text;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_text(&format!("{body}\n"))
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_text(&format!("{body}\n"))
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "summary" => summary_text::render_summary(&success.data),
        "monthly" => monthly_text::render_monthly(&success.data),
        "transactions" => transactions_text::render_transactions(&success.data),
        "check" => check_text::render_check(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
