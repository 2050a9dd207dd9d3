//! Adapter reset

use keybridge::BridgeConfig;

use super::{open_port, CommandResult};

pub fn run(config: &BridgeConfig, port: Option<String>) -> CommandResult {
    let mut serial = open_port(config, port)?;
    serial.send_reset()?;
    println!("Reset sent to {}", serial.path().display());
    Ok(())
}
