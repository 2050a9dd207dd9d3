//! Key actions

use core::fmt;

/// What to do with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Open the key's crosspoint(s)
    Release,
    /// Close the key's crosspoint(s)
    Press,
    /// Invert the current state; synthesized for toggle combos
    Flip,
}

impl KeyAction {
    /// Lowercase name, as used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Release => "release",
            KeyAction::Press => "press",
            KeyAction::Flip => "flip",
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
