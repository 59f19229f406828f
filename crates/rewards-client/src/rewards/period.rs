use chrono::{Datelike, NaiveDate};

use crate::error::{ClientError, ClientResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month within a specific year. Field order (year before
/// month) makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn month_name(&self) -> &'static str {
        // `month` always comes from a parsed NaiveDate, so 1..=12 holds.
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Display label like "April 2025".
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn looks_like_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(index, byte)| match index {
        4 | 7 => *byte == b'-',
        _ => byte.is_ascii_digit(),
    })
}

/// Inclusive date window applied before any aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardsWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RewardsWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

pub fn build_window(
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> ClientResult<RewardsWindow> {
    let from = parse_window_bound(from, "--from", command)?;
    let to = parse_window_bound(to, "--to", command)?;

    if let (Some(from_date), Some(to_date)) = (from, to) {
        if from_date > to_date {
            return Err(ClientError::invalid_argument_for_command(
                &format!(
                    "--from ({}) is after --to ({}); the window is empty.",
                    format_iso_date(from_date),
                    format_iso_date(to_date)
                ),
                Some(command),
            ));
        }
    }

    Ok(RewardsWindow { from, to })
}

fn parse_window_bound(
    raw: Option<&str>,
    flag: &str,
    command: &str,
) -> ClientResult<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(value) => match parse_transaction_date(value) {
            Some(date) => Ok(Some(date)),
            None => Err(ClientError::invalid_argument_for_command(
                &format!("{flag} must be a valid YYYY-MM-DD date, got `{value}`."),
                Some(command),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_orders_chronologically_not_lexically() {
        let april = Period { year: 2025, month: 4 };
        let december_prior = Period { year: 2024, month: 12 };
        let may = Period { year: 2025, month: 5 };

        assert!(december_prior < april);
        assert!(april < may);
    }

    #[test]
    fn labels_use_full_month_names() {
        assert_eq!(Period { year: 2025, month: 1 }.label(), "January 2025");
        assert_eq!(Period { year: 2024, month: 12 }.label(), "December 2024");
    }

    #[test]
    fn parse_rejects_non_iso_shapes() {
        assert!(parse_transaction_date("2025-4-01").is_none());
        assert!(parse_transaction_date("04/01/2025").is_none());
        assert!(parse_transaction_date("2025-04-01T00:00:00").is_none());
        assert!(parse_transaction_date("").is_none());
    }

    #[test]
    fn parse_rejects_impossible_calendar_dates() {
        assert!(parse_transaction_date("2025-02-30").is_none());
        assert!(parse_transaction_date("2025-13-01").is_none());
        assert!(parse_transaction_date("2024-02-29").is_some());
        assert!(parse_transaction_date("2025-02-29").is_none());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = build_window(Some("2025-04-01"), Some("2025-04-30"), "summary");

        assert!(window.is_ok());
        if let Ok(window) = window {
            let april_first = parse_transaction_date("2025-04-01");
            let april_last = parse_transaction_date("2025-04-30");
            let march_last = parse_transaction_date("2025-03-31");
            assert!(april_first.is_some_and(|d| window.contains(d)));
            assert!(april_last.is_some_and(|d| window.contains(d)));
            assert!(march_last.is_some_and(|d| !window.contains(d)));
        }
    }

    #[test]
    fn inverted_window_is_rejected() {
        let window = build_window(Some("2025-05-01"), Some("2025-04-01"), "summary");

        assert!(window.is_err());
        if let Err(error) = window {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}
