use clap::Parser;
use vuowma_forwarder::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(version = vuowma_forwarder::pkg_version(), "starting");

    cli::execute_command(&cli, settings).await?;
    Ok(())
}
