//! Input code to target key translation
//!
//! Input codes are the normalized key codes the front-ends deliver (Linux
//! input event codes, see [`crate::keycodes`]). Translation is a direct
//! array lookup into a per-target table.

use crate::key::Key;

/// Largest supported key map.
///
/// Firmware tables store one byte per entry with bit 7 marking specials,
/// so a table holds at most 128 codes.
pub const MAX_INPUT_CODES: usize = 128;

/// Per-target translation table, indexed by input code
#[derive(Debug)]
pub struct KeyMap {
    codes: &'static [Option<Key>],
}

impl KeyMap {
    /// Wrap a static table.
    ///
    /// Panics when the table exceeds [`MAX_INPUT_CODES`]; used in a `static`
    /// initializer this is a compile error.
    pub const fn new(codes: &'static [Option<Key>]) -> Self {
        assert!(
            codes.len() <= MAX_INPUT_CODES,
            "key map exceeds MAX_INPUT_CODES"
        );
        Self { codes }
    }

    /// Translate an input code. Out-of-range and unassigned codes yield `None`.
    pub fn translate(&self, code: u8) -> Option<Key> {
        self.codes.get(usize::from(code)).copied().flatten()
    }

    /// Check whether an input code maps to anything
    pub fn is_assigned(&self, code: u8) -> bool {
        self.translate(code).is_some()
    }

    /// Number of table entries, assigned or not
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All assigned entries as `(code, key)` pairs, in code order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Key)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(code, key)| key.map(|key| (code as u8, key)))
    }
}
