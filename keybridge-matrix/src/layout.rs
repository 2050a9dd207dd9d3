//! Target layouts
//!
//! A layout bundles everything target specific: the key map and the
//! default joystick bindings. Layouts are plain statics, see
//! [`crate::targets`].

use crate::address::MatrixAddress;
use crate::error::LayoutError;
use crate::key::{Key, Stroke};
use crate::keymap::KeyMap;
use crate::mt88xx::ChipModel;

/// Number of joystick directions that can be bound: up, down, left, right, fire
pub const JOYSTICK_BINDINGS: usize = 5;

/// A target computer's keyboard
#[derive(Debug)]
pub struct TargetLayout {
    pub name: &'static str,
    pub keymap: &'static KeyMap,
    /// Default joystick bindings in up, down, left, right, fire order
    pub joystick: [Option<Key>; JOYSTICK_BINDINGS],
}

impl TargetLayout {
    pub fn translate(&self, code: u8) -> Option<Key> {
        self.keymap.translate(code)
    }

    /// Check the layout against a switch chip.
    ///
    /// Catches empty combos and macros, and keys on X lines the chip
    /// doesn't have. A layout that fails here would still run, but the
    /// offending keys would be dropped at runtime.
    pub fn validate(&self, chip: ChipModel) -> Result<(), LayoutError> {
        self.validate_x_lines(chip.x_lines())
    }

    /// Like [`validate`](Self::validate), for a switch with `x_lines` X lines
    pub fn validate_x_lines(&self, x_lines: u8) -> Result<(), LayoutError> {
        let keys = self
            .keymap
            .iter()
            .map(|(_, key)| key)
            .chain(self.joystick.iter().flatten().copied());
        for key in keys {
            check_key(key, x_lines)?;
        }
        Ok(())
    }
}

fn check_key(key: Key, x_lines: u8) -> Result<(), LayoutError> {
    match key {
        Key::Plain(address) => check_address(address, x_lines),
        Key::Combo(combo) => {
            if combo.keys.is_empty() {
                return Err(LayoutError::EmptyCombo(combo.name));
            }
            combo
                .keys
                .iter()
                .try_for_each(|&address| check_address(address, x_lines))
        }
        Key::Macro(m) => {
            if m.strokes.is_empty() {
                return Err(LayoutError::EmptyMacro(m.name));
            }
            m.strokes.iter().try_for_each(|&stroke| match stroke {
                Stroke::Plain(address) => check_address(address, x_lines),
                Stroke::Combo(combo) => check_key(Key::Combo(combo), x_lines),
            })
        }
    }
}

fn check_address(address: MatrixAddress, x_lines: u8) -> Result<(), LayoutError> {
    if address.ax() < x_lines {
        Ok(())
    } else {
        Err(LayoutError::XLineOutOfRange { address, x_lines })
    }
}
