use chrono::NaiveDate;

use crate::rewards::points::calculate_points;

/// A validated purchase transaction, ready for reward math.
///
/// `amount` is `None` when the source row carried a missing or
/// unusable amount; such rows still count as transactions but earn
/// zero points.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub amount: Option<f64>,
    pub product: Option<String>,
}

impl Transaction {
    pub fn points(&self) -> u64 {
        self.amount.map(calculate_points).unwrap_or(0)
    }
}
