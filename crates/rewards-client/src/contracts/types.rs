use serde::Serialize;

/// Earliest and latest transaction dates observed in the loaded data,
/// reported so callers can see what window their filters landed in.
#[derive(Debug, Clone, Serialize)]
pub struct DataRangeHint {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    pub expected: String,
    pub received: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputWarning {
    pub row: i64,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerTotalRow {
    pub customer_id: String,
    pub name: String,
    pub total_points: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummaryData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub rows: Vec<CustomerTotalRow>,
    pub transaction_count: i64,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRewardRow {
    pub customer_id: String,
    pub name: String,
    pub month: String,
    pub year: i32,
    pub points: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRewardsData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub rows: Vec<MonthlyRewardRow>,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub transaction_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount_spent: Option<f64>,
    pub transaction_date: String,
    pub points: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodGroup {
    pub period: String,
    pub month: String,
    pub year: i32,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub groups: Vec<PeriodGroup>,
    pub transaction_count: i64,
    pub data_range_hint: DataRangeHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    pub label: String,
    pub command: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckData {
    pub source_used: String,
    pub summary: LoadSummary,
    pub warnings: Vec<InputWarning>,
    pub message: String,
    pub next_step: NextStep,
}
