use std::io;

use rewards_client::{ClientError, ErrorContract, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "summary" | "monthly" | "transactions" => success.data.clone(),
        "check" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone()
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    serialize_json_pretty(&json!({ "error": ErrorContract::from_error(error) }))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
