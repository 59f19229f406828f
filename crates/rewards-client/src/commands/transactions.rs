use crate::ClientResult;
use crate::commands::common::{data_range_hint, load_batch};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PeriodGroup, TransactionRow, TransactionsData};
use crate::rewards::period::{build_window, format_iso_date};
use crate::rewards::timeline::group_by_period;
use crate::rewards::types::Transaction;

#[derive(Debug, Default)]
pub struct TransactionsRunOptions {
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(TransactionsRunOptions {
        path: path.map(std::string::ToString::to_string),
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TransactionsRunOptions) -> ClientResult<SuccessEnvelope> {
    let batch = load_batch(options.path, options.stdin_override)?;
    let window = build_window(options.from.as_deref(), options.to.as_deref(), "transactions")?;

    let in_window = batch
        .transactions
        .iter()
        .filter(|transaction| window.contains(transaction.date))
        .cloned()
        .collect::<Vec<Transaction>>();

    let groups = group_by_period(&in_window)
        .into_iter()
        .map(|bucket| PeriodGroup {
            period: bucket.period.label(),
            month: bucket.period.month_name().to_string(),
            year: bucket.period.year,
            rows: bucket
                .transactions
                .iter()
                .map(transaction_row)
                .collect::<Vec<TransactionRow>>(),
        })
        .collect::<Vec<PeriodGroup>>();

    let data = TransactionsData {
        from: window.from.map(format_iso_date),
        to: window.to.map(format_iso_date),
        groups,
        transaction_count: in_window.len() as i64,
        data_range_hint: data_range_hint(&batch.transactions),
    };

    success("transactions", data)
}

fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        transaction_id: transaction.id.clone(),
        customer_id: transaction.customer_id.clone(),
        customer_name: transaction.customer_name.clone(),
        amount_spent: transaction.amount,
        transaction_date: format_iso_date(transaction.date),
        points: transaction.points(),
        product: transaction.product.clone(),
    }
}
