//! Keyboard front-ends
//!
//! Front-ends turn raw input (serial wire frames from the host capture tool,
//! or codes from a PS/2 keyboard) into [`Command`]s for the adapter. They
//! own key translation and the joystick learning loop; the engine only ever
//! sees translated keys.

pub mod command;
pub mod error;
pub mod ps2;
pub mod serial;
pub mod wire;

pub use command::Command;
pub use error::InputError;
pub use ps2::{reset_keyboard, Ps2FrontEnd, Ps2Port, PS2_BREAK};
pub use serial::SerialFrontEnd;
pub use wire::{WireDecoder, WireEvent, WIRE_BREAK, WIRE_MAKE, WIRE_RESET};
