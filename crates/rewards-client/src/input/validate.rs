use chrono::NaiveDate;

use crate::contracts::types::{InputIssue, InputWarning, LoadSummary};
use crate::input::parse::ParsedRecord;
use crate::rewards::period::parse_transaction_date;
use crate::rewards::types::Transaction;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub(crate) struct ValidatedBatch {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) summary: LoadSummary,
    pub(crate) warnings: Vec<InputWarning>,
}

pub(crate) fn validate_records(parsed_records: Vec<ParsedRecord>) -> ClientResult<ValidatedBatch> {
    let total_rows = parsed_records.len();
    let mut transactions = Vec::new();
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    for raw in parsed_records {
        let mut row_issues = Vec::new();

        let id = validate_required_string(
            raw.row,
            "id",
            raw.id,
            &mut row_issues,
            "id must be present and non-empty.",
        );
        let customer_id = validate_required_string(
            raw.row,
            "customerId",
            raw.customer_id,
            &mut row_issues,
            "customerId must be present and non-empty.",
        );
        let customer = validate_required_string(
            raw.row,
            "customer",
            raw.customer,
            &mut row_issues,
            "customer must be present and non-empty.",
        );
        let date = validate_date(raw.row, raw.date, &mut row_issues);
        let amount = validate_amount(raw.row, raw.amount, &mut warnings);
        let product = normalize_optional(raw.product);

        if row_issues.is_empty() {
            transactions.push(Transaction {
                id: id.unwrap_or_default(),
                customer_id: customer_id.unwrap_or_default(),
                customer_name: customer.unwrap_or_default(),
                date: date.unwrap_or_default(),
                amount,
                product,
            });
        } else {
            issues.extend(row_issues);
        }
    }

    let summary = LoadSummary {
        rows_read: total_rows as i64,
        rows_valid: transactions.len() as i64,
        rows_invalid: issues
            .iter()
            .map(|issue| issue.row)
            .collect::<std::collections::HashSet<i64>>()
            .len() as i64,
    };

    if !issues.is_empty() {
        return Err(ClientError::validation_failed(summary, issues));
    }

    Ok(ValidatedBatch {
        transactions,
        summary,
        warnings,
    })
}

fn validate_required_string(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<InputIssue>,
    description: &str,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(InputIssue {
            row,
            field: field.to_string(),
            code: "missing_required_field".to_string(),
            description: description.to_string(),
            expected: "non-empty string".to_string(),
            received: String::new(),
        });
    }
    normalized
}

fn validate_date(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<InputIssue>,
) -> Option<NaiveDate> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        issues.push(InputIssue {
            row,
            field: "date".to_string(),
            code: "missing_required_field".to_string(),
            description: "date must be present and non-empty.".to_string(),
            expected: "YYYY-MM-DD".to_string(),
            received: String::new(),
        });
        return None;
    };

    let Some(date) = parse_transaction_date(&candidate) else {
        issues.push(InputIssue {
            row,
            field: "date".to_string(),
            code: "invalid_date".to_string(),
            description: format!("date must be a real YYYY-MM-DD date; got \"{candidate}\""),
            expected: "YYYY-MM-DD".to_string(),
            received: candidate,
        });
        return None;
    };

    Some(date)
}

// Unusable amounts keep the row alive: the transaction still exists
// and still shows up in listings, it just earns zero points.
fn validate_amount(
    row: i64,
    value: Option<String>,
    warnings: &mut Vec<InputWarning>,
) -> Option<f64> {
    let normalized = normalize_optional(value);
    let Some(candidate) = normalized else {
        warnings.push(InputWarning {
            row,
            code: "missing_amount".to_string(),
            message: "amount is missing; the row counts as a transaction with 0 points."
                .to_string(),
        });
        return None;
    };

    match candidate.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            warnings.push(InputWarning {
                row,
                code: "unusable_amount".to_string(),
                message: format!(
                    "amount \"{candidate}\" is not a usable number; the row counts as a transaction with 0 points."
                ),
            });
            None
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        row: i64,
        id: Option<&str>,
        customer_id: Option<&str>,
        customer: Option<&str>,
        amount: Option<&str>,
        date: Option<&str>,
    ) -> ParsedRecord {
        ParsedRecord {
            row,
            id: id.map(str::to_string),
            customer_id: customer_id.map(str::to_string),
            customer: customer.map(str::to_string),
            amount: amount.map(str::to_string),
            date: date.map(str::to_string),
            product: None,
        }
    }

    #[test]
    fn clean_records_validate_with_no_warnings() {
        let batch = validate_records(vec![record(
            1,
            Some("t1"),
            Some("c1"),
            Some("Amara"),
            Some("120.5"),
            Some("2025-04-10"),
        )]);

        assert!(batch.is_ok());
        if let Ok(batch) = batch {
            assert_eq!(batch.transactions.len(), 1);
            assert_eq!(batch.summary.rows_valid, 1);
            assert!(batch.warnings.is_empty());
            assert_eq!(batch.transactions[0].amount, Some(120.5));
        }
    }

    #[test]
    fn missing_required_fields_fail_the_batch() {
        let batch = validate_records(vec![record(
            1,
            None,
            Some("c1"),
            Some("Amara"),
            Some("120"),
            Some("2025-04-10"),
        )]);

        assert!(batch.is_err());
        if let Err(error) = batch {
            assert_eq!(error.code, "validation_failed");
        }
    }

    #[test]
    fn impossible_date_fails_the_batch() {
        let batch = validate_records(vec![record(
            1,
            Some("t1"),
            Some("c1"),
            Some("Amara"),
            Some("120"),
            Some("2025-02-30"),
        )]);

        assert!(batch.is_err());
    }

    #[test]
    fn unusable_amount_warns_but_keeps_the_row() {
        let batch = validate_records(vec![record(
            1,
            Some("t1"),
            Some("c1"),
            Some("Amara"),
            Some("lots"),
            Some("2025-04-10"),
        )]);

        assert!(batch.is_ok());
        if let Ok(batch) = batch {
            assert_eq!(batch.transactions.len(), 1);
            assert_eq!(batch.transactions[0].amount, None);
            assert_eq!(batch.warnings.len(), 1);
            assert_eq!(batch.warnings[0].code, "unusable_amount");
        }
    }

    #[test]
    fn missing_amount_warns_but_keeps_the_row() {
        let batch = validate_records(vec![record(
            1,
            Some("t1"),
            Some("c1"),
            Some("Amara"),
            None,
            Some("2025-04-10"),
        )]);

        assert!(batch.is_ok());
        if let Ok(batch) = batch {
            assert_eq!(batch.warnings[0].code, "missing_amount");
            assert_eq!(batch.transactions[0].points(), 0);
        }
    }

    #[test]
    fn one_bad_row_reports_while_good_rows_do_not_save_the_batch() {
        let batch = validate_records(vec![
            record(
                1,
                Some("t1"),
                Some("c1"),
                Some("Amara"),
                Some("120"),
                Some("2025-04-10"),
            ),
            record(2, Some("t2"), Some("c2"), Some("Brooks"), Some("80"), None),
        ]);

        assert!(batch.is_err());
        if let Err(error) = batch {
            assert_eq!(error.code, "validation_failed");
        }
    }
}
