use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};
use super::summary_text::{points_string, range_hint_lines, window_label};

pub fn render_monthly(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("monthly output requires rows"))?;

    if rows.is_empty() {
        return Ok(match window_label(data) {
            Some(window) => format!(
                "No transactions in the requested window ({window}).\n\nWiden or drop --from/--to to see more data."
            ),
            None => "No transactions found.\n\nCheck that your source file has rows.".to_string(),
        });
    }

    let mut lines = vec![heading(rows.len(), data), String::new(), "Monthly rewards:".to_string()];

    let columns = [
        Column {
            name: "Customer",
            align: Align::Left,
        },
        Column {
            name: "Customer ID",
            align: Align::Left,
        },
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "Year",
            align: Align::Right,
        },
        Column {
            name: "Points",
            align: Align::Right,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("customer_id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("month")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("year")
                    .and_then(Value::as_i64)
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                points_string(row, "points"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    lines.extend(range_hint_lines(data));

    Ok(lines.join("\n"))
}

fn heading(count: usize, data: &Value) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    match window_label(data) {
        Some(window) => format!("Monthly rewards, {count} {noun} ({window})."),
        None => format!("Monthly rewards, {count} {noun}."),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_monthly;

    #[test]
    fn renders_month_and_year_columns() {
        let data = json!({
            "from": null,
            "to": null,
            "rows": [
                {"customer_id": "c1", "name": "Amara", "month": "December", "year": 2024, "points": 90},
                {"customer_id": "c1", "name": "Amara", "month": "January", "year": 2025, "points": 25}
            ],
            "data_range_hint": {"earliest": "2024-12-20", "latest": "2025-01-05"}
        });

        let rendered = render_monthly(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Monthly rewards, 2 entries."));
            assert!(text.contains("December"));
            assert!(text.contains("2024"));
            assert!(text.contains("January"));
        }
    }
}
