use crate::ClientResult;
use crate::commands::common::{data_range_hint, load_batch};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CustomerSummaryData, CustomerTotalRow};
use crate::rewards::period::{build_window, format_iso_date};
use crate::rewards::summary::summarize_by_customer;
use crate::rewards::types::Transaction;

#[derive(Debug, Default)]
pub struct SummaryRunOptions {
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(SummaryRunOptions {
        path: path.map(std::string::ToString::to_string),
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryRunOptions) -> ClientResult<SuccessEnvelope> {
    let batch = load_batch(options.path, options.stdin_override)?;
    let window = build_window(options.from.as_deref(), options.to.as_deref(), "summary")?;

    let in_window = batch
        .transactions
        .iter()
        .filter(|transaction| window.contains(transaction.date))
        .cloned()
        .collect::<Vec<Transaction>>();

    let totals = summarize_by_customer(&in_window);
    let rows = totals
        .into_iter()
        .map(|(customer_id, total)| CustomerTotalRow {
            customer_id,
            name: total.name,
            total_points: total.total_points,
        })
        .collect::<Vec<CustomerTotalRow>>();

    let data = CustomerSummaryData {
        from: window.from.map(format_iso_date),
        to: window.to.map(format_iso_date),
        rows,
        transaction_count: in_window.len() as i64,
        data_range_hint: data_range_hint(&batch.transactions),
    };

    success("summary", data)
}
