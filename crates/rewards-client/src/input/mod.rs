pub(crate) mod parse;
pub(crate) mod source;
pub(crate) mod validate;

use crate::ClientError;

pub(crate) fn invalid_input_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide JSON array or CSV input via path or stdin.".to_string(),
            "Run `rewards check --help` to confirm transaction field requirements.".to_string(),
        ],
    )
    .with_input_help()
}
