use std::collections::BTreeMap;

use crate::rewards::period::Period;
use crate::rewards::types::Transaction;

/// Transactions in chronological order. The sort is stable, so rows
/// sharing a date keep their input order, and the input slice is left
/// untouched.
pub fn sort_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|transaction| transaction.date);
    sorted
}

#[derive(Debug, Clone)]
pub struct PeriodBucket {
    pub period: Period,
    pub transactions: Vec<Transaction>,
}

/// Transactions grouped into chronologically ordered month buckets,
/// with rows inside each bucket also in chronological order.
pub fn group_by_period(transactions: &[Transaction]) -> Vec<PeriodBucket> {
    let mut buckets: BTreeMap<Period, Vec<Transaction>> = BTreeMap::new();

    for transaction in sort_by_date(transactions) {
        let period = Period::from_date(transaction.date);
        buckets.entry(period).or_default().push(transaction);
    }

    buckets
        .into_iter()
        .map(|(period, transactions)| PeriodBucket {
            period,
            transactions,
        })
        .collect()
}
