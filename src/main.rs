//! keybridge CLI
//!
//! Host side tooling for the keyboard adapter.

use anyhow::Result;
use clap::Parser;
use keybridge::BridgeConfig;
use tracing::debug;

mod cli;
use cli::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config_path = cli.config.unwrap_or_else(BridgeConfig::default_path);
    debug!("Loading config from {:?}", config_path);
    let config = BridgeConfig::load(&config_path)?;

    match cli.command {
        Commands::Capture {
            port,
            device,
            grab,
            reset,
        } => commands::capture::run(&config, port, device, grab, reset),
        Commands::Reset { port } => commands::reset::run(&config, port),
        Commands::Replay {
            file,
            target,
            chip,
            steps,
        } => commands::replay::run(&config, file, target, chip, steps),
        Commands::Layout { target, all } => commands::layout::run(&config, target, all),
        Commands::Devices => commands::devices::run(),
    }
}
