use std::collections::BTreeMap;

use crate::rewards::period::Period;
use crate::rewards::types::Transaction;

#[derive(Debug, Clone)]
pub struct CustomerTotal {
    pub name: String,
    pub total_points: u64,
}

/// Total reward points per customer, keyed by customer id.
///
/// The display name is taken from the first transaction seen for that
/// id; later rows with a different spelling do not rename the
/// customer. BTreeMap keeps the output ordered by id.
pub fn summarize_by_customer(transactions: &[Transaction]) -> BTreeMap<String, CustomerTotal> {
    let mut totals: BTreeMap<String, CustomerTotal> = BTreeMap::new();

    for transaction in transactions {
        let entry = totals
            .entry(transaction.customer_id.clone())
            .or_insert_with(|| CustomerTotal {
                name: transaction.customer_name.clone(),
                total_points: 0,
            });
        entry.total_points += transaction.points();
    }

    totals
}

#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub customer_id: String,
    pub name: String,
    pub period: Period,
    pub points: u64,
}

/// Reward points per customer per calendar month, ordered by customer
/// id and then chronologically within each customer.
pub fn summarize_by_customer_month(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut buckets: BTreeMap<(String, Period), MonthlySummary> = BTreeMap::new();

    for transaction in transactions {
        let period = Period::from_date(transaction.date);
        let key = (transaction.customer_id.clone(), period);
        let entry = buckets.entry(key).or_insert_with(|| MonthlySummary {
            customer_id: transaction.customer_id.clone(),
            name: transaction.customer_name.clone(),
            period,
            points: 0,
        });
        entry.points += transaction.points();
    }

    buckets.into_values().collect()
}
