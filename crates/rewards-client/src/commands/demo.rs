use crate::ClientResult;
use crate::commands::{monthly, summary, transactions};
use crate::contracts::envelope::SuccessEnvelope;
use crate::error::ClientError;

/// Bundled sample purchases covering the interesting cases: a $50
/// no-points row, fractional cents, a missing-amount row, and two
/// customers sharing a display name under different ids.
pub const SAMPLE_TRANSACTIONS: &str = r#"[
  {"id": "d-001", "customerId": "cust-amara", "customer": "Amara Okafor", "amount": 120.75, "date": "2025-02-03", "product": "Standing desk"},
  {"id": "d-002", "customerId": "cust-amara", "customer": "Amara Okafor", "amount": 50, "date": "2025-02-18", "product": "Desk mat"},
  {"id": "d-003", "customerId": "cust-amara", "customer": "Amara Okafor", "amount": 86.2, "date": "2025-03-07", "product": "Task lamp"},
  {"id": "d-004", "customerId": "cust-jordan-1", "customer": "Jordan Lee", "amount": 210, "date": "2025-02-11", "product": "Office chair"},
  {"id": "d-005", "customerId": "cust-jordan-1", "customer": "Jordan Lee", "amount": 64.99, "date": "2025-04-02", "product": "Cable kit"},
  {"id": "d-006", "customerId": "cust-jordan-2", "customer": "Jordan Lee", "amount": 101.01, "date": "2025-03-21", "product": "Monitor arm"},
  {"id": "d-007", "customerId": "cust-priya", "customer": "Priya Raman", "amount": 399.5, "date": "2024-12-29", "product": "Monitor"},
  {"id": "d-008", "customerId": "cust-priya", "customer": "Priya Raman", "date": "2025-03-21", "product": "Gift wrap"},
  {"id": "d-009", "customerId": "cust-priya", "customer": "Priya Raman", "amount": 75, "date": "2025-04-15", "product": "Keyboard"}
]"#;

pub fn run(topic: &str) -> ClientResult<SuccessEnvelope> {
    match topic {
        "summary" => summary::run_with_options(summary::SummaryRunOptions {
            stdin_override: Some(SAMPLE_TRANSACTIONS.to_string()),
            ..Default::default()
        }),
        "monthly" => monthly::run_with_options(monthly::MonthlyRunOptions {
            stdin_override: Some(SAMPLE_TRANSACTIONS.to_string()),
            ..Default::default()
        }),
        "transactions" => transactions::run_with_options(transactions::TransactionsRunOptions {
            stdin_override: Some(SAMPLE_TRANSACTIONS.to_string()),
            ..Default::default()
        }),
        _ => Err(ClientError::invalid_argument_for_command(
            &format!("Unknown demo topic `{topic}`. Use summary, monthly, or transactions."),
            Some("demo"),
        )),
    }
}
