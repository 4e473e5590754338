mod bootstrap;
mod cli;

use autofilm_events::{AppEvent, EventBus};
use autofilm_sync::Orchestrator;
use crate::bootstrap::{config, logging};
use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config = config::load(&cli.config, &events).await?;
    let policy = config::output_policy(&config, &events)?;

    let start = std::time::Instant::now();
    let orchestrator = Orchestrator::new(policy, events.clone());
    let summary = orchestrator.run(config.server_configs()).await;

    tracing::debug!("Run summary: {:?}", summary);
    events.emit(AppEvent::Finished {
        servers: summary.servers,
        skipped_servers: summary.skipped_servers,
        duration: start.elapsed(),
    });

    Ok(())
}
