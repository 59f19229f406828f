use rewards_client::ClientResult;
use rewards_client::SuccessEnvelope;
use rewards_client::commands::monthly::{self, MonthlyRunOptions};
use rewards_client::commands::summary::{self, SummaryRunOptions};
use rewards_client::commands::transactions::{self, TransactionsRunOptions};
use serde_json::Value;

pub fn transaction_json(
    id: &str,
    customer_id: &str,
    customer: &str,
    amount: f64,
    date: &str,
) -> Value {
    serde_json::json!({
        "id": id,
        "customerId": customer_id,
        "customer": customer,
        "amount": amount,
        "date": date,
    })
}

pub fn batch_body(rows: &[Value]) -> String {
    Value::Array(rows.to_vec()).to_string()
}

pub fn run_summary(
    body: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    summary::run_with_options(SummaryRunOptions {
        path: None,
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        stdin_override: Some(body.to_string()),
    })
}

pub fn run_monthly(
    body: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    monthly::run_with_options(MonthlyRunOptions {
        path: None,
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        stdin_override: Some(body.to_string()),
    })
}

pub fn run_transactions(
    body: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    transactions::run_with_options(TransactionsRunOptions {
        path: None,
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        stdin_override: Some(body.to_string()),
    })
}

pub fn data_rows(envelope: &SuccessEnvelope) -> Vec<Value> {
    envelope
        .data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
