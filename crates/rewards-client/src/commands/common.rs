use crate::ClientResult;
use crate::contracts::types::{DataRangeHint, InputWarning, LoadSummary};
use crate::input::{parse, source, validate};
use crate::rewards::period::format_iso_date;
use crate::rewards::types::Transaction;

const REQUIRED_TRANSACTION_FIELDS: [(&str, &str); 5] = [
    ("id", "string"),
    ("customerId", "string"),
    ("customer", "string"),
    ("amount", "number"),
    ("date", "date"),
];

const OPTIONAL_TRANSACTION_FIELDS: [(&str, &str); 1] = [("product", "string|null")];

pub(crate) fn required_field_names() -> Vec<&'static str> {
    REQUIRED_TRANSACTION_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

pub(crate) fn optional_field_names() -> Vec<&'static str> {
    OPTIONAL_TRANSACTION_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedBatch {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) summary: LoadSummary,
    pub(crate) warnings: Vec<InputWarning>,
    pub(crate) source_used: String,
    pub(crate) source_ref: Option<String>,
}

pub(crate) fn load_batch(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<LoadedBatch> {
    let resolved = source::resolve_source(path, stdin_override)?;
    let parsed = parse::parse_source(&resolved.content)?;
    let validated = validate::validate_records(parsed)?;

    Ok(LoadedBatch {
        transactions: validated.transactions,
        summary: validated.summary,
        warnings: validated.warnings,
        source_used: resolved.source_kind.as_str().to_string(),
        source_ref: resolved.source_ref,
    })
}

pub(crate) fn data_range_hint(transactions: &[Transaction]) -> DataRangeHint {
    let earliest = transactions.iter().map(|t| t.date).min();
    let latest = transactions.iter().map(|t| t.date).max();

    DataRangeHint {
        earliest: earliest.map(format_iso_date),
        latest: latest.map(format_iso_date),
    }
}
