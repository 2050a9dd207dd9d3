//! Target keyboard matrix engine
//!
//! Drives a vintage computer's keyboard matrix through an MT88xx analog
//! crosspoint switch. Input codes (Linux key codes) are translated per target
//! into crosspoint addresses, combos or macros, and the engine sequences the
//! resulting switch closures.
//!
//! ```text
//! input code -> KeyMap -> Key -> TargetKeyboard -> CrosspointSwitch (Mt88xx)
//! ```
//!
//! The crate is `no_std` when built without the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod action;
pub mod address;
pub mod engine;
pub mod error;
pub mod hal;
pub mod key;
pub mod keycodes;
pub mod keymap;
pub mod layout;
pub mod mt88xx;
pub mod state;
pub mod targets;

pub use action::KeyAction;
pub use address::MatrixAddress;
pub use engine::{KeySink, TargetKeyboard, Timing};
pub use error::{AddressError, LayoutError};
pub use hal::{ControlLines, CrosspointSwitch, Delay, Line};
#[cfg(feature = "std")]
pub use hal::StdDelay;
pub use key::{Combo, ComboKind, Key, Macro, Stroke};
pub use keymap::{KeyMap, MAX_INPUT_CODES};
pub use layout::{TargetLayout, JOYSTICK_BINDINGS};
pub use mt88xx::{ChipModel, Mt88xx};
pub use state::MatrixState;
