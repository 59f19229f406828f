use crate::ClientResult;
use crate::commands::common::{data_range_hint, load_batch};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{MonthlyRewardRow, MonthlyRewardsData};
use crate::rewards::period::{build_window, format_iso_date};
use crate::rewards::summary::summarize_by_customer_month;
use crate::rewards::types::Transaction;

#[derive(Debug, Default)]
pub struct MonthlyRunOptions {
    pub path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<&str>, from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(MonthlyRunOptions {
        path: path.map(std::string::ToString::to_string),
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: MonthlyRunOptions) -> ClientResult<SuccessEnvelope> {
    let batch = load_batch(options.path, options.stdin_override)?;
    let window = build_window(options.from.as_deref(), options.to.as_deref(), "monthly")?;

    let in_window = batch
        .transactions
        .iter()
        .filter(|transaction| window.contains(transaction.date))
        .cloned()
        .collect::<Vec<Transaction>>();

    let rows = summarize_by_customer_month(&in_window)
        .into_iter()
        .map(|row| MonthlyRewardRow {
            customer_id: row.customer_id,
            name: row.name,
            month: row.period.month_name().to_string(),
            year: row.period.year,
            points: row.points,
        })
        .collect::<Vec<MonthlyRewardRow>>();

    let data = MonthlyRewardsData {
        from: window.from.map(format_iso_date),
        to: window.to.map(format_iso_date),
        rows,
        data_range_hint: data_range_hint(&batch.transactions),
    };

    success("monthly", data)
}
