use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `rewards check --help`.
/// Contains the transaction schema and workflow guidance.
pub const CHECK_AFTER_HELP: &str = "\
How loading works:
  Rewards does not talk to any store or API. You export purchase
  transactions into a normalized file, then point a command at it.

  Accepted formats:
    JSON — one top-level array of transaction objects
    CSV  — one header row with schema field names

  <path> is a local file path.
  To read stdin explicitly, use `-` as the path.
  Example: cat purchases.json | rewards check -
  One command call takes one file. For multiple files, combine
  first or run multiple commands.

What to do next:
  1. Export your purchases into normalized JSON or schema-matching CSV.
  2. Run `rewards check <path>` and fix any reported issues.
  3. Run `rewards summary <path>` (or monthly / transactions) once check passes.

Transaction schema:
  JSON example (one top-level array):
  [
    {
      \"id\": \"txn-1042\",
      \"customerId\": \"cust-amara\",
      \"customer\": \"Amara Okafor\",
      \"amount\": 120.75,
      \"date\": \"2025-02-03\",
      \"product\": \"Standing desk\"
    }
  ]

  CSV example (header + rows):
  id,customerId,customer,amount,date,product
  txn-1042,cust-amara,Amara Okafor,120.75,2025-02-03,Standing desk
  txn-1043,cust-amara,Amara Okafor,50,2025-02-18,Desk mat

Field rules (very explicit):
  id (required):
    A unique transaction identifier from your source system.

  customerId (required):
    A stable customer identifier. Totals group by this value, never
    by display name, so two customers sharing a name stay separate.

  customer (required):
    Customer display name. The first spelling seen for a customerId
    is the one reports use.

  amount (required):
    Purchase amount in dollars, a number, not text.
    Rows with a missing or unusable amount still count as
    transactions but earn 0 points; check reports them as warnings.

  date (required):
    Date only, exactly `YYYY-MM-DD`, and a real calendar date.
    Example: `2025-02-03`

  product (optional):
    Product label if your export has one. Omit it otherwise.

Points rule:
  2 points per whole dollar over $100, plus 1 point per whole dollar
  between $50 and $100. $120 earns 90 points. Fractional cents never
  earn: $120.75 also earns 90 points.
";

#[derive(Debug, Parser)]
#[command(
    name = "rewards",
    version,
    about = "customer reward points over purchase transactions",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Total reward points per customer
    Summary {
        /// Path to a normalized JSON or CSV file (use `-` for stdin)
        path: Option<String>,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Reward points per customer per calendar month
    Monthly {
        /// Path to a normalized JSON or CSV file (use `-` for stdin)
        path: Option<String>,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// List transactions with earned points, grouped by month
    Transactions {
        /// Path to a normalized JSON or CSV file (use `-` for stdin)
        path: Option<String>,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Validate transaction data without computing any summaries
    #[command(after_long_help = CHECK_AFTER_HELP)]
    Check {
        /// Path to a normalized JSON or CSV file (use `-` for stdin)
        path: Option<String>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Preview Rewards output using bundled sample data
    #[command(arg_required_else_help = true)]
    Demo {
        #[command(subcommand)]
        command: DemoCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemoCommand {
    /// Preview per-customer totals over sample purchases
    Summary,
    /// Preview per-customer monthly rewards over sample purchases
    Monthly,
    /// Preview the grouped transaction listing over sample purchases
    Transactions,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, DemoCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 14] = [
            vec!["rewards", "summary", "./purchases.json"],
            vec!["rewards", "summary", "./purchases.json", "--json"],
            vec![
                "rewards",
                "summary",
                "./purchases.json",
                "--from",
                "2025-01-01",
                "--to",
                "2025-06-30",
            ],
            vec!["rewards", "summary", "-"],
            vec!["rewards", "monthly", "./purchases.csv"],
            vec!["rewards", "monthly", "--from", "2025-01-01"],
            vec!["rewards", "monthly", "./purchases.csv", "--json"],
            vec!["rewards", "transactions", "./purchases.json"],
            vec!["rewards", "transactions", "--to", "2025-06-30", "--json"],
            vec!["rewards", "check", "./purchases.json"],
            vec!["rewards", "check", "-", "--json"],
            vec!["rewards", "demo", "summary"],
            vec!["rewards", "demo", "monthly"],
            vec!["rewards", "demo", "transactions"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn parse_summary_flags() {
        let parsed = parse_from([
            "rewards",
            "summary",
            "./purchases.json",
            "--from",
            "2025-01-01",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Summary {
                    path: Some(_),
                    from: Some(_),
                    to: None,
                    json: true,
                }
            ));
        }
    }

    #[test]
    fn parse_demo_subcommands() {
        let summary = parse_from(["rewards", "demo", "summary"]);
        assert!(summary.is_ok());
        if let Ok(cli) = summary {
            assert!(matches!(
                cli.command,
                Commands::Demo {
                    command: DemoCommand::Summary
                }
            ));
        }

        let monthly = parse_from(["rewards", "demo", "monthly"]);
        assert!(monthly.is_ok());
        if let Ok(cli) = monthly {
            assert!(matches!(
                cli.command,
                Commands::Demo {
                    command: DemoCommand::Monthly
                }
            ));
        }

        let transactions = parse_from(["rewards", "demo", "transactions"]);
        assert!(transactions.is_ok());
        if let Ok(cli) = transactions {
            assert!(matches!(
                cli.command,
                Commands::Demo {
                    command: DemoCommand::Transactions
                }
            ));
        }
    }

    #[test]
    fn bare_demo_shows_help() {
        let parsed = parse_from(["rewards", "demo"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(
                err.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = parse_from(["rewards", "summary", "--from", "2025-99-01"]);
        assert!(parsed.is_err());

        let impossible = parse_from(["rewards", "summary", "--from", "2025-02-30"]);
        assert!(impossible.is_err());

        let wrong_shape = parse_from(["rewards", "summary", "--from", "01/02/2025"]);
        assert!(wrong_shape.is_err());
    }

    #[test]
    fn invalid_demo_subcommand_is_rejected() {
        let parsed = parse_from(["rewards", "demo", "anomalies"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["rewards", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["rewards", "check", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
