//! Host key capture
//!
//! Reads key events from a Linux input device and forwards them to the
//! adapter as wire frames. Key codes travel unchanged: the adapter's key
//! maps are indexed by Linux input codes.

use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context};
use evdev::{Device, EventType, InputEvent, Key};
use keybridge_input::WireEvent;
use tracing::{debug, info, trace, warn};

/// Built-in keyboard on most laptops and PCs with a PS/2 controller
pub const DEFAULT_KEYBOARD: &str = "/dev/input/by-path/platform-i8042-serio-0-event-kbd";

/// evdev key event values
const KEY_RELEASED: i32 = 0;
const KEY_PRESSED: i32 = 1;
const KEY_REPEATED: i32 = 2;

/// Wire event for an input event, if it should be forwarded.
///
/// Only key presses and releases are forwarded. Auto repeat is left to the
/// target, and codes above 255 don't fit the wire format.
pub fn wire_event(event: &InputEvent) -> Option<WireEvent> {
    if event.event_type() != EventType::KEY {
        return None;
    }
    let Ok(code) = u8::try_from(event.code()) else {
        trace!("Key code {} doesn't fit the wire format", event.code());
        return None;
    };
    match event.value() {
        KEY_PRESSED => Some(WireEvent::press(code)),
        KEY_RELEASED => Some(WireEvent::release(code)),
        KEY_REPEATED => None,
        other => {
            debug!("Unexpected key event value {}", other);
            None
        }
    }
}

/// Devices reporting key events, sorted by path
pub fn key_devices() -> Vec<(PathBuf, Device)> {
    let mut devices: Vec<_> = evdev::enumerate()
        .filter(|(_, device)| device.supported_events().contains(EventType::KEY))
        .collect();
    devices.sort_by(|a, b| a.0.cmp(&b.0));
    devices
}

/// Whether a device looks like a full keyboard rather than e.g. a power button
pub fn is_keyboard(device: &Device) -> bool {
    device.supported_keys().map_or(false, |keys| {
        keys.contains(Key::KEY_A) && keys.contains(Key::KEY_Z) && keys.contains(Key::KEY_SPACE)
    })
}

/// Open `path`, or the first keyboard found
pub fn open_keyboard(path: Option<&Path>) -> anyhow::Result<(PathBuf, Device)> {
    if let Some(path) = path {
        let device = Device::open(path)
            .with_context(|| format!("Cannot open {} (try with sudo?)", path.display()))?;
        return Ok((path.to_path_buf(), device));
    }
    if let Ok(device) = Device::open(DEFAULT_KEYBOARD) {
        return Ok((PathBuf::from(DEFAULT_KEYBOARD), device));
    }
    key_devices()
        .into_iter()
        .find(|(_, device)| is_keyboard(device))
        .ok_or_else(|| anyhow!("No keyboard found (try with sudo?)"))
}

/// How long one wait for key events may block before `running` is checked again
pub const POLL_TIMEOUT_MS: i32 = 200;

/// Forward key events from `device` to `out` while `running` is set
pub fn forward<W: Write>(
    device: &mut Device,
    running: &AtomicBool,
    out: &mut W,
) -> anyhow::Result<()> {
    info!(
        "Reading key events from {}",
        device.name().unwrap_or("unnamed device")
    );
    forward_events(running, || read_events(device, POLL_TIMEOUT_MS), out)
}

/// Write wire frames for each batch `next` returns, until `running` clears.
///
/// `next` may return an empty batch when nothing arrived in time.
pub fn forward_events<F, W>(running: &AtomicBool, mut next: F, out: &mut W) -> anyhow::Result<()>
where
    F: FnMut() -> anyhow::Result<Vec<InputEvent>>,
    W: Write,
{
    while running.load(Ordering::SeqCst) {
        for event in next()? {
            if let Some(wire) = wire_event(&event) {
                trace!("Forwarding {:?}", wire);
                out.write_all(&wire.encode())
                    .context("Writing to the adapter")?;
            }
        }
    }
    debug!("Forwarding stopped");
    Ok(())
}

/// Wait up to `timeout_ms` for events on `device` and read them
fn read_events(device: &mut Device, timeout_ms: i32) -> anyhow::Result<Vec<InputEvent>> {
    let mut fds = libc::pollfd {
        fd: device.as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    if result < 0 {
        let err = io::Error::last_os_error();
        // Ctrl-C lands here, the caller checks its flag next
        if err.kind() == io::ErrorKind::Interrupted {
            return Ok(Vec::new());
        }
        return Err(err).context("Waiting for key events");
    }
    if result == 0 {
        return Ok(Vec::new());
    }
    let events = device.fetch_events().context("Reading key events")?;
    Ok(events.collect())
}

/// Grab the device so its key events don't reach other applications
pub fn grab(device: &mut Device) -> anyhow::Result<()> {
    device.grab().context("Grabbing keyboard")?;
    info!("Keyboard grabbed, its keys only reach the target now");
    Ok(())
}

pub fn ungrab(device: &mut Device) {
    if let Err(e) = device.ungrab() {
        warn!("Failed to release keyboard: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: u16, value: i32) -> InputEvent {
        InputEvent::new(EventType::KEY, code, value)
    }

    #[test]
    fn test_press_and_release() {
        assert_eq!(
            wire_event(&key_event(Key::KEY_Q.code(), 1)),
            Some(WireEvent::press(16))
        );
        assert_eq!(
            wire_event(&key_event(Key::KEY_F1.code(), 0)),
            Some(WireEvent::release(59))
        );
    }

    #[test]
    fn test_repeat_dropped() {
        assert_eq!(wire_event(&key_event(16, 2)), None);
    }

    #[test]
    fn test_non_key_events_dropped() {
        assert_eq!(wire_event(&InputEvent::new(EventType::SYNCHRONIZATION, 0, 0)), None);
        assert_eq!(wire_event(&InputEvent::new(EventType::MISC, 4, 30)), None);
    }

    #[test]
    fn test_forward_stops_when_flag_clears() {
        let running = AtomicBool::new(true);
        let mut batches = 0;
        let mut out = Vec::new();
        forward_events(
            &running,
            || {
                batches += 1;
                match batches {
                    1 => Ok(vec![key_event(Key::KEY_A.code(), 1)]),
                    2 => Ok(Vec::new()),
                    _ => {
                        running.store(false, Ordering::SeqCst);
                        Ok(vec![key_event(Key::KEY_A.code(), 0)])
                    }
                }
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(batches, 3);
        assert_eq!(out, vec![1, 30, 0, 30]);
    }

    #[test]
    fn test_forward_not_started_when_flag_clear() {
        let running = AtomicBool::new(false);
        let mut out = Vec::new();
        forward_events(&running, || panic!("read while stopped"), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_forward_read_error_propagates() {
        let running = AtomicBool::new(true);
        let mut out = Vec::new();
        let err = forward_events(&running, || Err(anyhow!("device gone")), &mut out);
        assert!(err.is_err());
    }

    #[test]
    fn test_wide_codes_dropped() {
        assert_eq!(wire_event(&key_event(Key::BTN_SOUTH.code(), 1)), None);
    }
}
