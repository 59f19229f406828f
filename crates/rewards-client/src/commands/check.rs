use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CheckData, NextStep};
use crate::commands::common::load_batch;

#[derive(Debug, Default)]
pub struct CheckRunOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(CheckRunOptions {
        path: path.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: CheckRunOptions) -> ClientResult<SuccessEnvelope> {
    let batch = load_batch(options.path, options.stdin_override)?;

    let message = if batch.warnings.is_empty() {
        "Validation passed. Every row is ready for reward math.".to_string()
    } else {
        format!(
            "Validation passed with {} warning(s). Flagged rows count as transactions with 0 points.",
            batch.warnings.len()
        )
    };

    let summary_command = match batch.source_ref.as_deref() {
        Some(path) => format!("rewards summary {path}"),
        None => "rewards summary".to_string(),
    };

    let data = CheckData {
        source_used: batch.source_used,
        summary: batch.summary,
        warnings: batch.warnings,
        message,
        next_step: NextStep {
            label: "View reward summaries".to_string(),
            command: summary_command,
        },
    };

    success("check", data)
}
