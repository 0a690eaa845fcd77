//! Command executor for dispatching CLI commands

use super::handlers::forward::ForwardArgs;
use super::handlers::{CheckCommandHandler, ForwardCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute the parsed command with merged and validated settings
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Commands::Forward {
            messages,
            batch_id,
            unsent,
            dry_run,
        } => {
            ForwardCommandHandler::new(&settings)?
                .execute(ForwardArgs {
                    messages,
                    batch_id: *batch_id,
                    unsent,
                    dry_run: *dry_run,
                })
                .await
        }
        Commands::Check => CheckCommandHandler::new(settings).execute().await,
    }
}
