use std::collections::HashMap;

use serde_json::Value;

use crate::commands::common::{optional_field_names, required_field_names};
use crate::input::invalid_input_error;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub(crate) struct ParsedRecord {
    pub(crate) row: i64,
    pub(crate) id: Option<String>,
    pub(crate) customer_id: Option<String>,
    pub(crate) customer: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) product: Option<String>,
}

pub(crate) fn parse_source(content: &str) -> ClientResult<Vec<ParsedRecord>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(invalid_input_error("Transaction source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_input_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_input_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(ClientError::invalid_input_format(
        "Unsupported transaction format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<ParsedRecord>> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| invalid_input_error("Invalid JSON input. Provide a valid JSON array."))?;

    let Some(items) = parsed.as_array() else {
        return Err(invalid_input_error(
            "JSON input must be a top-level array of transaction objects.",
        ));
    };

    let mut records = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(invalid_input_error(
                "JSON array entries must all be objects with transaction fields.",
            ));
        };

        records.push(ParsedRecord {
            row: (index as i64) + 1,
            id: read_optional_string(object.get("id")),
            customer_id: read_optional_string(object.get("customerId")),
            customer: read_optional_string(object.get("customer")),
            amount: read_optional_string(object.get("amount")),
            date: read_optional_string(object.get("date")),
            product: read_optional_string(object.get("product")),
        });
    }

    Ok(records)
}

fn parse_csv(content: &str) -> ClientResult<Vec<ParsedRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| invalid_input_error("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::schema_mismatch(
            required_field_names()
                .iter()
                .map(|value| value.to_string())
                .collect(),
            optional_field_names()
                .iter()
                .map(|value| value.to_string())
                .collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut records = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record =
            result_row.map_err(|_| invalid_input_error("CSV rows are malformed or not UTF-8."))?;

        records.push(ParsedRecord {
            row: (row_index as i64) + 1,
            id: value_for(&record, &index_by_name, "id"),
            customer_id: value_for(&record, &index_by_name, "customerId"),
            customer: value_for(&record, &index_by_name, "customer"),
            amount: value_for(&record, &index_by_name, "amount"),
            date: value_for(&record, &index_by_name, "date"),
            product: value_for(&record, &index_by_name, "product"),
        });
    }

    Ok(records)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    if let Some(number_value) = current.as_f64() {
        return Some(number_value.to_string());
    }

    Some(current.to_string())
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let required_fields = required_field_names();
    let optional_fields = optional_field_names();

    for required in &required_fields {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    for header in actual_headers {
        let allowed = required_fields
            .iter()
            .any(|value| value == &header.as_str())
            || optional_fields
                .iter()
                .any(|value| value == &header.as_str());
        if !allowed {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_parses_into_records() {
        let content = r#"[
            {"id": "t1", "customerId": "c1", "customer": "Amara", "amount": 120.5, "date": "2025-04-10"},
            {"id": "t2", "customerId": "c2", "customer": "Brooks", "amount": "75", "date": "2025-04-11", "product": "Desk"}
        ]"#;

        let records = parse_source(content);

        assert!(records.is_ok());
        if let Ok(records) = records {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].row, 1);
            assert_eq!(records[0].id.as_deref(), Some("t1"));
            assert_eq!(records[0].amount.as_deref(), Some("120.5"));
            assert_eq!(records[1].product.as_deref(), Some("Desk"));
        }
    }

    #[test]
    fn csv_with_valid_headers_parses() {
        let content = "id,customerId,customer,amount,date\nt1,c1,Amara,120,2025-04-10\n";

        let records = parse_source(content);

        assert!(records.is_ok());
        if let Ok(records) = records {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].customer_id.as_deref(), Some("c1"));
            assert_eq!(records[0].date.as_deref(), Some("2025-04-10"));
        }
    }

    #[test]
    fn csv_with_unknown_header_is_a_schema_mismatch() {
        let content = "id,customerId,customer,amount,date,channel\nt1,c1,Amara,120,2025-04-10,web\n";

        let records = parse_source(content);

        assert!(records.is_err());
        if let Err(error) = records {
            assert_eq!(error.code, "schema_mismatch");
        }
    }

    #[test]
    fn non_array_json_is_rejected() {
        let records = parse_source(r#"{"id": "t1"}"#);

        assert!(records.is_err());
        if let Err(error) = records {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn ndjson_is_rejected() {
        let content = "{\"id\": \"t1\"}\n{\"id\": \"t2\"}\n";

        let records = parse_source(content);

        assert!(records.is_err());
    }
}
