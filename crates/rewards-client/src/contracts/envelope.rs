use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::ClientError;

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

/// The serialized form of a `ClientError`, nested under an `error` key
/// by the JSON output layer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorContract {
    pub fn from_error(error: &ClientError) -> Self {
        Self {
            code: error.code.clone(),
            message: error.message.clone(),
            recovery_steps: error.recovery_steps.clone(),
            data: error.data.clone(),
        }
    }
}

pub fn success<T: Serialize>(command: &str, data: T) -> Result<SuccessEnvelope, ClientError> {
    let data = serde_json::to_value(data).map_err(|err| {
        ClientError::internal_serialization(&format!(
            "Could not serialize `{command}` response data: {err}"
        ))
    })?;

    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_wraps_data_with_command_and_version() {
        let envelope = success("summary", json!({"rows": []}));

        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert!(envelope.ok);
            assert_eq!(envelope.command, "summary");
            assert_eq!(envelope.version, API_VERSION);
            assert_eq!(envelope.data, json!({"rows": []}));
        }
    }

    #[test]
    fn error_contract_carries_every_client_error_field() {
        let error = ClientError::new("invalid_argument", "bad flag", vec!["fix it".to_string()]);
        let contract = ErrorContract::from_error(&error);

        assert_eq!(contract.code, "invalid_argument");
        assert_eq!(contract.message, "bad flag");
        assert_eq!(contract.recovery_steps, vec!["fix it".to_string()]);
        assert!(contract.data.is_none());

        let with_data = ErrorContract::from_error(&error.with_data(json!({"command_hint": "summary"})));
        assert_eq!(
            with_data.data,
            Some(json!({"command_hint": "summary"}))
        );
    }
}
