use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{InputIssue, LoadSummary};

pub(crate) const INPUT_HELP_COMMAND: &str = "rewards check --help";
pub(crate) const INPUT_HELP_SECTION_TITLE: &str = "Input Troubleshooting";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_input_help(self) -> Self {
        self.with_input_help_data(json!({}))
    }

    pub fn with_input_help_data(self, data: Value) -> Self {
        self.with_data(merge_input_help_data(data))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `rewards {cmd} --help` for usage."),
            None => "Run `rewards --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_input_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported transaction format (JSON array or CSV).".to_string(),
                "Run `rewards check --help` to confirm field requirements.".to_string(),
            ],
        )
        .with_input_help_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let mut expected_headers = required_headers.clone();
        expected_headers.extend(optional_headers.clone());

        Self::new(
            "schema_mismatch",
            "CSV headers do not satisfy the transaction schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                "Run `rewards check --help` to review required and optional fields.".to_string(),
                "Rerun `rewards check <path>`.".to_string(),
            ],
        )
        .with_input_help_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn validation_failed(summary: LoadSummary, issues: Vec<InputIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "validation_failed",
            &format!(
                "Transaction data failed validation: {issue_count} rows need fixes. No summaries were computed."
            ),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun rewards check <path>.".to_string(),
                "Then rerun the summary command you wanted.".to_string(),
            ],
        )
        .with_input_help_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

fn merge_input_help_data(mut data: Value) -> Value {
    if !data.is_object() {
        data = json!({});
    }

    if let Some(object) = data.as_object_mut() {
        object.insert(
            "help_command".to_string(),
            Value::String(INPUT_HELP_COMMAND.to_string()),
        );
        object.insert(
            "help_section_title".to_string(),
            Value::String(INPUT_HELP_SECTION_TITLE.to_string()),
        );
    }

    data
}

pub type ClientResult<T> = Result<T, ClientError>;
