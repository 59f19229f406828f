use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("summary output requires rows"))?;

    if rows.is_empty() {
        return Ok(empty_message(data));
    }

    let mut lines = vec![heading(rows.len(), data), String::new(), "Totals:".to_string()];

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
            name: "Total Points",
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
                points_string(row, "total_points"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    lines.extend(range_hint_lines(data));

    Ok(lines.join("\n"))
}

fn heading(count: usize, data: &Value) -> String {
    let noun = if count == 1 { "customer" } else { "customers" };
    match window_label(data) {
        Some(window) => format!("Reward totals for {count} {noun} ({window})."),
        None => format!("Reward totals for {count} {noun}."),
    }
}

fn empty_message(data: &Value) -> String {
    match window_label(data) {
        Some(window) => format!(
            "No transactions in the requested window ({window}).\n\nWiden or drop --from/--to to see more data."
        ),
        None => "No transactions found.\n\nCheck that your source file has rows.".to_string(),
    }
}

pub(super) fn window_label(data: &Value) -> Option<String> {
    let from = data.get("from").and_then(Value::as_str);
    let to = data.get("to").and_then(Value::as_str);
    match (from, to) {
        (Some(from), Some(to)) => Some(format!("{from} to {to}")),
        (Some(from), None) => Some(format!("from {from}")),
        (None, Some(to)) => Some(format!("through {to}")),
        (None, None) => None,
    }
}

pub(super) fn range_hint_lines(data: &Value) -> Vec<String> {
    let Some(range_hint) = data.get("data_range_hint") else {
        return Vec::new();
    };
    let earliest = range_hint.get("earliest").and_then(Value::as_str);
    let latest = range_hint.get("latest").and_then(Value::as_str);
    if earliest.is_none() && latest.is_none() {
        return Vec::new();
    }

    vec![
        String::new(),
        format!(
            "Data covers: {} to {}",
            earliest.unwrap_or("unknown"),
            latest.unwrap_or("unknown")
        ),
    ]
}

pub(super) fn points_string(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_u64)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "0".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_summary;

    #[test]
    fn renders_totals_table_with_range_hint() {
        let data = json!({
            "from": null,
            "to": null,
            "rows": [
                {"customer_id": "c1", "name": "Amara", "total_points": 115},
                {"customer_id": "c2", "name": "Brooks", "total_points": 250}
            ],
            "transaction_count": 3,
            "data_range_hint": {"earliest": "2025-03-10", "latest": "2025-04-15"}
        });

        let rendered = render_summary(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Reward totals for 2 customers."));
            assert!(text.contains("Customer"));
            assert!(text.contains("Amara"));
            assert!(text.contains("115"));
            assert!(text.contains("Data covers: 2025-03-10 to 2025-04-15"));
        }
    }

    #[test]
    fn empty_window_explains_the_filter() {
        let data = json!({
            "from": "2026-01-01",
            "to": "2026-12-31",
            "rows": [],
            "transaction_count": 0,
            "data_range_hint": {"earliest": "2025-03-10", "latest": "2025-04-15"}
        });

        let rendered = render_summary(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No transactions in the requested window"));
            assert!(text.contains("2026-01-01 to 2026-12-31"));
        }
    }
}
