//! backup-ui - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use backup_ui::{dialogs_for, run_command, Cli, Page};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting backup-ui v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: batch={}, command={:?}", cli.batch, cli.command);

    let mut page = Page::new(dialogs_for(cli.batch), cli.batch);
    page.init();

    run_command(&mut page, &cli.command).await
}
