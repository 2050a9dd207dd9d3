//! Serial wire protocol
//!
//! The host capture tool sends two bytes per key event:
//!
//! ```text
//!   [ make/break, code ]     make/break: 0 = release, 1 = press
//! ```
//!
//! `code` is a Linux input key code. A single `'!'` at a frame boundary
//! resets the adapter. There's no framing beyond that, so a lost byte shifts
//! every following frame until the next reset.

use tracing::trace;

use crate::error::InputError;

pub const WIRE_BREAK: u8 = 0;
pub const WIRE_MAKE: u8 = 1;
pub const WIRE_RESET: u8 = b'!';

/// One decoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEvent {
    Key { pressed: bool, code: u8 },
    Reset,
}

impl WireEvent {
    pub fn press(code: u8) -> Self {
        WireEvent::Key {
            pressed: true,
            code,
        }
    }

    pub fn release(code: u8) -> Self {
        WireEvent::Key {
            pressed: false,
            code,
        }
    }

    /// Bytes as sent over the wire
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            WireEvent::Key { pressed, code } => {
                vec![if pressed { WIRE_MAKE } else { WIRE_BREAK }, code]
            }
            WireEvent::Reset => vec![WIRE_RESET],
        }
    }
}

/// Reassembles frames from a byte stream
#[derive(Debug, Default)]
pub struct WireDecoder {
    /// First byte of a frame in progress
    pending: Option<u8>,
}

impl WireDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a partial frame
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Feed one byte. Returns an event once a frame is complete.
    ///
    /// A frame with an invalid make/break byte is consumed whole and
    /// reported as [`InputError::InvalidAction`].
    pub fn push(&mut self, byte: u8) -> Result<Option<WireEvent>, InputError> {
        let Some(first) = self.pending.take() else {
            if byte == WIRE_RESET {
                return Ok(Some(WireEvent::Reset));
            }
            self.pending = Some(byte);
            return Ok(None);
        };
        trace!("Wire frame: [0x{:02X}, 0x{:02X}]", first, byte);
        match first {
            WIRE_BREAK => Ok(Some(WireEvent::release(byte))),
            WIRE_MAKE => Ok(Some(WireEvent::press(byte))),
            other => Err(InputError::InvalidAction(other)),
        }
    }
}
