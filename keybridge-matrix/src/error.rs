//! Matrix error types
//!
//! The engine itself never fails; these errors describe malformed addresses
//! and target tables, which are caught when a layout is validated.

use thiserror::Error;

use crate::address::MatrixAddress;

/// Errors converting raw values into matrix addresses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Raw address 0x{0:02X} has bit 7 set")]
    TagBitSet(u8),
}

/// Problems found in a target layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Combo \"{0}\" has no member keys")]
    EmptyCombo(&'static str),

    #[error("Macro \"{0}\" has no strokes")]
    EmptyMacro(&'static str),

    #[error("Key {address} is beyond X line {x_lines} of the switch chip")]
    XLineOutOfRange { address: MatrixAddress, x_lines: u8 },
}
