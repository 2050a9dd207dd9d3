//! Target keys: plain crosspoints, combos and macros
//!
//! A translated input code resolves to a [`Key`]. Plain keys close a single
//! crosspoint. Combos are chords of crosspoints realizing one logical key
//! the target matrix can't express as a single point (e.g. "symbol shift +
//! M" for a period on the Spectrum). Macros type a short sequence of keys.
//!
//! Combos and macros are referenced directly (`&'static`), so target tables
//! need no index bookkeeping. Macro strokes can only be plain keys or combos,
//! which keeps macros from nesting.

use core::fmt;

use crate::address::MatrixAddress;

/// How a combo reacts to its source key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKind {
    /// Members are pressed together and released in reverse order
    Chord,
    /// Each press flips the members on or off; releases are ignored
    Toggle,
}

/// A chord of crosspoints acting as one key
#[derive(Debug, PartialEq, Eq)]
pub struct Combo {
    pub name: &'static str,
    pub kind: ComboKind,
    /// Members, in press order
    pub keys: &'static [MatrixAddress],
}

impl Combo {
    /// Momentary chord, e.g. a modifier plus a key
    pub const fn chord(name: &'static str, keys: &'static [MatrixAddress]) -> Self {
        Self {
            name,
            kind: ComboKind::Chord,
            keys,
        }
    }

    /// Toggle key, e.g. caps lock latching a shift key
    pub const fn toggle(name: &'static str, keys: &'static [MatrixAddress]) -> Self {
        Self {
            name,
            kind: ComboKind::Toggle,
            keys,
        }
    }

    pub const fn is_toggle(&self) -> bool {
        matches!(self.kind, ComboKind::Toggle)
    }
}

/// One step of a macro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Plain(MatrixAddress),
    Combo(&'static Combo),
}

/// A sequence of strokes typed one after another
///
/// Built with a struct literal in tables, so that the stroke slice lives
/// in static memory alongside the combos it references.
#[derive(Debug, PartialEq, Eq)]
pub struct Macro {
    pub name: &'static str,
    pub strokes: &'static [Stroke],
}

/// What an input code translates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Plain(MatrixAddress),
    Combo(&'static Combo),
    Macro(&'static Macro),
}

impl Key {
    /// True for combos and macros
    pub const fn is_special(&self) -> bool {
        !matches!(self, Key::Plain(_))
    }
}

impl From<MatrixAddress> for Key {
    fn from(address: MatrixAddress) -> Self {
        Key::Plain(address)
    }
}

impl From<Stroke> for Key {
    fn from(stroke: Stroke) -> Self {
        match stroke {
            Stroke::Plain(address) => Key::Plain(address),
            Stroke::Combo(combo) => Key::Combo(combo),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Plain(address) => write!(f, "{address}"),
            Key::Combo(combo) if combo.is_toggle() => write!(f, "toggle:{}", combo.name),
            Key::Combo(combo) => write!(f, "combo:{}", combo.name),
            Key::Macro(m) => write!(f, "macro:{}", m.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Table helpers
// ---------------------------------------------------------------------------

/// Unassigned table entry
pub const NA: Option<Key> = None;

/// Table entry for a plain key
pub const fn plain(address: MatrixAddress) -> Option<Key> {
    Some(Key::Plain(address))
}

/// Table entry for a combo
pub const fn combo(combo: &'static Combo) -> Option<Key> {
    Some(Key::Combo(combo))
}

/// Table entry for a macro
pub const fn macro_key(m: &'static Macro) -> Option<Key> {
    Some(Key::Macro(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFT: MatrixAddress = MatrixAddress::at(0, 0);
    const Q: MatrixAddress = MatrixAddress::at(1, 1);
    const W: MatrixAddress = MatrixAddress::at(2, 0);

    static SHIFTED: Combo = Combo::chord("shifted", &[SHIFT, Q]);
    static LOCK: Combo = Combo::toggle("lock", &[SHIFT]);
    static TWICE: Macro = Macro {
        name: "twice",
        strokes: &[Stroke::Combo(&SHIFTED), Stroke::Plain(W)],
    };

    #[test]
    fn test_display() {
        assert_eq!(Key::Plain(Q).to_string(), "X1/Y1");
        assert_eq!(Key::Combo(&SHIFTED).to_string(), "combo:shifted");
        assert_eq!(Key::Combo(&LOCK).to_string(), "toggle:lock");
        assert_eq!(Key::Macro(&TWICE).to_string(), "macro:twice");
    }

    #[test]
    fn test_stroke_into_key() {
        assert_eq!(Key::from(TWICE.strokes[0]), Key::Combo(&SHIFTED));
        assert_eq!(Key::from(TWICE.strokes[1]), Key::Plain(W));
        assert!(Key::from(TWICE.strokes[0]).is_special());
        assert!(!Key::from(TWICE.strokes[1]).is_special());
    }
}
