//! Command handlers for the CLI application.
//!
//! - `capture`: forward a local keyboard to the adapter
//! - `reset`: reset the adapter
//! - `replay`: run wire bytes through a simulated adapter
//! - `layout`: print a target's key map
//! - `devices`: list key event devices

pub mod capture;
pub mod devices;
pub mod layout;
pub mod replay;
pub mod reset;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use keybridge::{BridgeConfig, SerialPort};

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Open the adapter's serial port, `port` overriding the configured one
pub fn open_port(config: &BridgeConfig, port: Option<String>) -> anyhow::Result<SerialPort> {
    let path = port.unwrap_or_else(|| config.serial.port.clone());
    Ok(SerialPort::open(path, config.serial.baud)?)
}

/// Set up a Ctrl-C handler that clears the returned flag
pub fn setup_interrupt_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);

    if let Err(e) = ctrlc::set_handler(move || {
        flag.store(false, Ordering::SeqCst);
    }) {
        tracing::warn!("Cannot catch Ctrl-C, the adapter won't be reset on exit: {}", e);
    }

    running
}
