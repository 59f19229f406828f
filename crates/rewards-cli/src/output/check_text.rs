use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_check(data: &Value) -> io::Result<String> {
    let summary = data
        .get("summary")
        .ok_or_else(|| io::Error::other("check output requires a summary"))?;

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Validation passed.");

    let mut lines = vec![message.to_string(), String::new(), "Summary:".to_string()];
    lines.extend(key_value_rows(
        &[
            ("Source:", summary_field(data, "source_used")),
            ("Rows read:", count_field(summary, "rows_read")),
            ("Rows valid:", count_field(summary, "rows_valid")),
            ("Rows invalid:", count_field(summary, "rows_invalid")),
        ],
        2,
    ));

    let warnings = data
        .get("warnings")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in &warnings {
            let row = warning.get("row").and_then(Value::as_i64).unwrap_or(0);
            let message = warning
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown warning");
            lines.push(format!("  row {row}: {message}"));
        }
    }

    if let Some(next_step) = data.get("next_step") {
        let label = next_step
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or("Next step");
        let command = next_step
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or("rewards summary <path>");
        lines.push(String::new());
        lines.push(format!("{label}:"));
        lines.push(format!("  {command}"));
    }

    Ok(lines.join("\n"))
}

fn summary_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn count_field(summary: &Value, key: &str) -> String {
    summary
        .get(key)
        .and_then(Value::as_i64)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "0".to_string())
}
