use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders a header row plus data rows at natural column widths.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = natural_column_widths(columns, rows);

    let mut output = Vec::with_capacity(rows.len() + 1);
    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    output.push(format_row(columns, &header, &widths));

    for row in rows {
        output.push(format_row(columns, row, &widths));
    }

    output
}

fn natural_column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.len())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.len());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut line = " ".repeat(INDENT);
    let gap = " ".repeat(COLUMN_GAP);

    for (index, column) in columns.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0);
        let value = cells.get(index).map(String::as_str).unwrap_or("");
        if index > 0 {
            line.push_str(&gap);
        }
        match column.align {
            Align::Left => line.push_str(&format!("{value:<width$}")),
            Align::Right => line.push_str(&format!("{value:>width$}")),
        }
    }

    line.trim_end().to_string()
}
