//! Keyboard capture

use std::path::PathBuf;

use keybridge::{capture, BridgeConfig};
use tracing::info;

use super::{open_port, setup_interrupt_handler, CommandResult};

pub fn run(
    config: &BridgeConfig,
    port: Option<String>,
    device: Option<PathBuf>,
    grab: bool,
    reset: bool,
) -> CommandResult {
    let mut serial = open_port(config, port)?;

    let device_path = device.or_else(|| config.capture.device.clone());
    let (path, mut keyboard) = capture::open_keyboard(device_path.as_deref())?;
    info!("Using keyboard {}", path.display());

    if reset {
        serial.send_reset()?;
    }

    let grab = grab || config.capture.grab;
    if grab {
        capture::grab(&mut keyboard)?;
    } else {
        info!("Keys also reach this machine; use --grab to keep them for the target");
    }

    let running = setup_interrupt_handler();
    info!("Forwarding keys (Ctrl+C to stop)");
    let result = capture::forward(&mut keyboard, &running, &mut serial);

    if grab {
        capture::ungrab(&mut keyboard);
    }
    // leave no key stuck on the target
    serial.send_reset()?;
    result
}
