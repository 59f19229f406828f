use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Summary { json, .. }
        | Commands::Monthly { json, .. }
        | Commands::Transactions { json, .. }
        | Commands::Check { json, .. } => {
            if *json {
                OutputMode::Json
            } else {
                OutputMode::Text
            }
        }
        Commands::Demo { .. } => OutputMode::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn mode_uses_json_when_the_flag_is_present() {
        let cases: [&[&str]; 4] = [
            &["rewards", "summary", "rows.json", "--json"],
            &["rewards", "monthly", "rows.json", "--json"],
            &["rewards", "transactions", "rows.json", "--json"],
            &["rewards", "check", "rows.json", "--json"],
        ];

        for args in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok(), "failed to parse: {args:?}");
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn mode_uses_text_without_the_flag() {
        let summary = parse_from(["rewards", "summary", "rows.json"]);
        assert!(summary.is_ok());
        if let Ok(cli) = summary {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }

        let demo = parse_from(["rewards", "demo", "summary"]);
        assert!(demo.is_ok());
        if let Ok(cli) = demo {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
