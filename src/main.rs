mod domain;
mod clients;

mod app_system;
mod cart;
mod config;
mod console;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod catalog_actor;

use std::process::ExitCode;
use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use crate::app_system::{setup_tracing, AppError, ShopSystem};
use crate::config::ShopConfig;
use crate::console::{run_console, Terminal};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ShopConfig::parse();
    setup_tracing(config.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Shop console failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ShopConfig) -> Result<(), AppError> {
    config.validate()?;
    let seed = config.load_catalog()?;

    info!("Starting shop console");
    let system = ShopSystem::new(seed, config.mailbox_capacity);

    let mut session = system.open_session();
    let mut terminal = Terminal::new(BufReader::new(stdin()), stdout());
    let result = run_console(&mut session, &mut terminal).await;

    // The session holds a catalog handle; release it so the actor can stop.
    drop(session);
    system.shutdown().await?;

    result?;
    info!("Application completed successfully");
    Ok(())
}
