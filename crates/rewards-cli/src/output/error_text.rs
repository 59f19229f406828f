use rewards_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    if let Some(issues) = validation_issue_lines(error) {
        lines.push(String::new());
        lines.push("Rows needing fixes:".to_string());
        lines.extend(issues);
    }

    lines.join("\n")
}

fn validation_issue_lines(error: &ClientError) -> Option<Vec<String>> {
    let data = error.data.as_ref()?;
    let issues = data.get("issues")?.as_array()?;
    if issues.is_empty() {
        return None;
    }

    let lines = issues
        .iter()
        .map(|issue| {
            let row = issue.get("row").and_then(serde_json::Value::as_i64).unwrap_or(0);
            let field = issue
                .get("field")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown");
            let description = issue
                .get("description")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("");
            format!("  row {row}, {field}: {description}")
        })
        .collect::<Vec<String>>();

    Some(lines)
}
