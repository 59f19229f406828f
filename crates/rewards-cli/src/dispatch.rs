use rewards_client::commands;
use rewards_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, DemoCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Summary { path, from, to, .. } => commands::summary::run(
            path.as_deref(),
            from.as_ref().map(|value| value.as_str()),
            to.as_ref().map(|value| value.as_str()),
        ),
        Commands::Monthly { path, from, to, .. } => commands::monthly::run(
            path.as_deref(),
            from.as_ref().map(|value| value.as_str()),
            to.as_ref().map(|value| value.as_str()),
        ),
        Commands::Transactions { path, from, to, .. } => commands::transactions::run(
            path.as_deref(),
            from.as_ref().map(|value| value.as_str()),
            to.as_ref().map(|value| value.as_str()),
        ),
        Commands::Check { path, .. } => commands::check::run(path.as_deref()),
        Commands::Demo { command } => commands::demo::run(demo_command_to_str(command)),
    }
}

fn demo_command_to_str(command: &DemoCommand) -> &'static str {
    match command {
        DemoCommand::Summary => "summary",
        DemoCommand::Monthly => "monthly",
        DemoCommand::Transactions => "transactions",
    }
}
