//! Input device listing

use keybridge::capture;

use super::CommandResult;

pub fn run() -> CommandResult {
    let devices = capture::key_devices();
    if devices.is_empty() {
        println!("No key event devices found (try with sudo?)");
        return Ok(());
    }
    for (path, device) in &devices {
        let kind = if capture::is_keyboard(device) {
            "keyboard"
        } else {
            "keys"
        };
        println!(
            "{:<24} {:<9} {}",
            path.display(),
            kind,
            device.name().unwrap_or("(unnamed)")
        );
    }
    Ok(())
}
