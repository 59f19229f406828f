use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};
use super::summary_text::{points_string, range_hint_lines, window_label};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let groups = data
        .get("groups")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires groups"))?;

    if groups.is_empty() {
        return Ok(match window_label(data) {
            Some(window) => format!(
                "No transactions in the requested window ({window}).\n\nWiden or drop --from/--to to see more data."
            ),
            None => "No transactions found.\n\nCheck that your source file has rows.".to_string(),
        });
    }

    let transaction_count = data
        .get("transaction_count")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let mut lines = vec![heading(transaction_count, groups.len(), data)];

    for group in groups {
        let period = group
            .get("period")
            .and_then(Value::as_str)
            .unwrap_or("Unknown period");
        lines.push(String::new());
        lines.push(format!("{period}:"));
        lines.extend(group_table(group));
    }

    lines.extend(range_hint_lines(data));

    Ok(lines.join("\n"))
}

fn group_table(group: &Value) -> Vec<String> {
    let rows = group
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Customer",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Points",
            align: Align::Right,
        },
        Column {
            name: "Product",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("transaction_date")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("customer_name")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                amount_string(row),
                points_string(row, "points"),
                row.get("product")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table(&columns, &table_rows)
}

fn heading(transaction_count: i64, group_count: usize, data: &Value) -> String {
    let month_noun = if group_count == 1 { "month" } else { "months" };
    match window_label(data) {
        Some(window) => format!(
            "{transaction_count} transactions across {group_count} {month_noun} ({window})."
        ),
        None => format!("{transaction_count} transactions across {group_count} {month_noun}."),
    }
}

fn amount_string(row: &Value) -> String {
    match row.get("amount_spent").and_then(Value::as_f64) {
        Some(amount) => format!("${amount:.2}"),
        None => "(no amount)".to_string(),
    }
}
