//! Front-end error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid make/break byte 0x{0:02X}")]
    InvalidAction(u8),

    #[error("Keyboard not attached (no reply to reset)")]
    NotAttached,

    #[error("Keyboard self test failed")]
    SelfTestFailed,
}
