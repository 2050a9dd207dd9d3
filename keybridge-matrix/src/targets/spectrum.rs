//! Sinclair ZX Spectrum
//!
//! Keyboard lines as wired to the switch chip:
//!
//! ```text
//!        X0    X1    X2    X3    X4    X5    X6    X7
//!   Y0    1     Q     A     0     P   CAPS ENTER SPACE
//!   Y1    2     W     S     9     O     Z     L   SYMBOL
//!   Y2    3     E     D     8     I     X     K     M
//!   Y3    4     R     F     7     U     C     J     N
//!   Y4    5     T     G     6     Y     V     H     B
//! ```
//!
//! Punctuation missing from the Spectrum keyboard is typed through symbol
//! shift combos, cursor keys and delete through caps shift combos. F2 and F3
//! type the commands for formatting and loading from the Interface 1 serial
//! port at 19200 baud.

use crate::address::MatrixAddress;
use crate::key::{combo, macro_key, plain, Combo, Key, Macro, Stroke, NA};
use crate::keymap::KeyMap;
use crate::layout::TargetLayout;

const fn at(x: u8, y: u8) -> MatrixAddress {
    MatrixAddress::at(x, y)
}

pub const N1: MatrixAddress = at(0, 0);
pub const N2: MatrixAddress = at(0, 1);
pub const N3: MatrixAddress = at(0, 2);
pub const N4: MatrixAddress = at(0, 3);
pub const N5: MatrixAddress = at(0, 4);
pub const N6: MatrixAddress = at(3, 4);
pub const N7: MatrixAddress = at(3, 3);
pub const N8: MatrixAddress = at(3, 2);
pub const N9: MatrixAddress = at(3, 1);
pub const N0: MatrixAddress = at(3, 0);

pub const Q: MatrixAddress = at(1, 0);
pub const W: MatrixAddress = at(1, 1);
pub const E: MatrixAddress = at(1, 2);
pub const R: MatrixAddress = at(1, 3);
pub const T: MatrixAddress = at(1, 4);
pub const A: MatrixAddress = at(2, 0);
pub const S: MatrixAddress = at(2, 1);
pub const D: MatrixAddress = at(2, 2);
pub const F: MatrixAddress = at(2, 3);
pub const G: MatrixAddress = at(2, 4);
pub const P: MatrixAddress = at(4, 0);
pub const O: MatrixAddress = at(4, 1);
pub const I: MatrixAddress = at(4, 2);
pub const U: MatrixAddress = at(4, 3);
pub const Y: MatrixAddress = at(4, 4);
pub const CAPS_SHIFT: MatrixAddress = at(5, 0);
pub const Z: MatrixAddress = at(5, 1);
pub const X: MatrixAddress = at(5, 2);
pub const C: MatrixAddress = at(5, 3);
pub const V: MatrixAddress = at(5, 4);
pub const ENTER: MatrixAddress = at(6, 0);
pub const L: MatrixAddress = at(6, 1);
pub const K: MatrixAddress = at(6, 2);
pub const J: MatrixAddress = at(6, 3);
pub const H: MatrixAddress = at(6, 4);
pub const SPACE: MatrixAddress = at(7, 0);
pub const SYMBOL_SHIFT: MatrixAddress = at(7, 1);
pub const M: MatrixAddress = at(7, 2);
pub const N: MatrixAddress = at(7, 3);
pub const B: MatrixAddress = at(7, 4);

// ---------------------------------------------------------------------------
// Combos
// ---------------------------------------------------------------------------

pub static PERIOD: Combo = Combo::chord("period", &[SYMBOL_SHIFT, M]);
pub static COMMA: Combo = Combo::chord("comma", &[SYMBOL_SHIFT, N]);
pub static SEMICOLON: Combo = Combo::chord("semicolon", &[SYMBOL_SHIFT, O]);
pub static SLASH: Combo = Combo::chord("slash", &[SYMBOL_SHIFT, V]);
pub static ASTERISK: Combo = Combo::chord("asterisk", &[SYMBOL_SHIFT, B]);
pub static PLUS: Combo = Combo::chord("plus", &[SYMBOL_SHIFT, K]);
pub static MINUS: Combo = Combo::chord("minus", &[SYMBOL_SHIFT, J]);
pub static QUOTE: Combo = Combo::chord("quote", &[SYMBOL_SHIFT, N7]);
pub static DOUBLE_QUOTE: Combo = Combo::chord("double quote", &[SYMBOL_SHIFT, P]);
pub static EQUAL: Combo = Combo::chord("equal", &[SYMBOL_SHIFT, L]);
pub static UNDERSCORE: Combo = Combo::chord("underscore", &[SYMBOL_SHIFT, N0]);
pub static DELETE: Combo = Combo::chord("delete", &[CAPS_SHIFT, N0]);
pub static UP: Combo = Combo::chord("up", &[CAPS_SHIFT, N7]);
pub static DOWN: Combo = Combo::chord("down", &[CAPS_SHIFT, N6]);
pub static LEFT: Combo = Combo::chord("left", &[CAPS_SHIFT, N5]);
pub static RIGHT: Combo = Combo::chord("right", &[CAPS_SHIFT, N8]);
pub static EXTENDED: Combo = Combo::chord("extended mode", &[SYMBOL_SHIFT, CAPS_SHIFT]);
pub static CAPS_LOCK: Combo = Combo::toggle("caps lock", &[CAPS_SHIFT]);

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// `FORMAT "b";19200`
pub static FORMAT_SERIAL: Macro = Macro {
    name: "format serial",
    strokes: &[
        Stroke::Combo(&EXTENDED),
        Stroke::Combo(&UNDERSCORE),
        Stroke::Combo(&DOUBLE_QUOTE),
        Stroke::Plain(B),
        Stroke::Combo(&DOUBLE_QUOTE),
        Stroke::Combo(&SEMICOLON),
        Stroke::Plain(N1),
        Stroke::Plain(N9),
        Stroke::Plain(N2),
        Stroke::Plain(N0),
        Stroke::Plain(N0),
    ],
};

/// `LOAD *"b"`
pub static LOAD_SERIAL: Macro = Macro {
    name: "load serial",
    strokes: &[
        Stroke::Plain(J),
        Stroke::Combo(&ASTERISK),
        Stroke::Combo(&DOUBLE_QUOTE),
        Stroke::Plain(B),
        Stroke::Combo(&DOUBLE_QUOTE),
    ],
};

// ---------------------------------------------------------------------------
// Key map
// ---------------------------------------------------------------------------

static CODES: [Option<Key>; 109] = [
    NA,                         // RESERVED
    NA,                         // ESC
    plain(N1),                  // 1
    plain(N2),                  // 2
    plain(N3),                  // 3
    plain(N4),                  // 4
    plain(N5),                  // 5
    plain(N6),                  // 6
    plain(N7),                  // 7
    plain(N8),                  // 8
    plain(N9),                  // 9
    plain(N0),                  // 0
    combo(&MINUS),              // MINUS
    combo(&EQUAL),              // EQUAL
    combo(&DELETE),             // BACKSPACE
    NA,                         // TAB
    plain(Q),                   // Q
    plain(W),                   // W
    plain(E),                   // E
    plain(R),                   // R
    plain(T),                   // T
    plain(Y),                   // Y
    plain(U),                   // U
    plain(I),                   // I
    plain(O),                   // O
    plain(P),                   // P
    NA,                         // LEFTBRACE
    NA,                         // RIGHTBRACE
    plain(ENTER),               // ENTER
    plain(SYMBOL_SHIFT),        // LEFTCTRL
    plain(A),                   // A
    plain(S),                   // S
    plain(D),                   // D
    plain(F),                   // F
    plain(G),                   // G
    plain(H),                   // H
    plain(J),                   // J
    plain(K),                   // K
    plain(L),                   // L
    combo(&SEMICOLON),          // SEMICOLON
    combo(&QUOTE),              // APOSTROPHE
    NA,                         // GRAVE
    plain(CAPS_SHIFT),          // LEFTSHIFT
    combo(&DOUBLE_QUOTE),       // BACKSLASH
    plain(Z),                   // Z
    plain(X),                   // X
    plain(C),                   // C
    plain(V),                   // V
    plain(B),                   // B
    plain(N),                   // N
    plain(M),                   // M
    combo(&COMMA),              // COMMA
    combo(&PERIOD),             // DOT
    NA,                         // SLASH
    plain(CAPS_SHIFT),          // RIGHTSHIFT
    combo(&ASTERISK),           // KPASTERISK
    plain(SYMBOL_SHIFT),        // LEFTALT
    plain(SPACE),               // SPACE
    combo(&CAPS_LOCK),          // CAPSLOCK
    NA,                         // F1
    macro_key(&FORMAT_SERIAL),  // F2
    macro_key(&LOAD_SERIAL),    // F3
    NA,                         // F4
    NA,                         // F5
    NA,                         // F6
    NA,                         // F7
    NA,                         // F8
    NA,                         // F9
    NA,                         // F10
    NA,                         // NUMLOCK
    NA,                         // SCROLLLOCK
    plain(N7),                  // KP7
    plain(N8),                  // KP8
    plain(N9),                  // KP9
    combo(&MINUS),              // KPMINUS
    plain(N4),                  // KP4
    plain(N5),                  // KP5
    plain(N6),                  // KP6
    combo(&PLUS),               // KPPLUS
    plain(N1),                  // KP1
    plain(N2),                  // KP2
    plain(N3),                  // KP3
    plain(N0),                  // KP0
    combo(&PERIOD),             // KPDOT
    NA,                         // (84)
    NA,                         // ZENKAKUHANKAKU
    NA,                         // 102ND
    NA,                         // F11
    NA,                         // F12
    NA,                         // RO
    NA,                         // KATAKANA
    NA,                         // HIRAGANA
    NA,                         // HENKAN
    NA,                         // KATAKANAHIRAGANA
    NA,                         // MUHENKAN
    NA,                         // KPJPCOMMA
    plain(ENTER),               // KPENTER
    plain(SYMBOL_SHIFT),        // RIGHTCTRL
    combo(&SLASH),              // KPSLASH
    NA,                         // SYSRQ
    plain(SYMBOL_SHIFT),        // RIGHTALT
    NA,                         // LINEFEED
    NA,                         // HOME
    combo(&UP),                 // UP
    NA,                         // PAGEUP
    combo(&LEFT),               // LEFT
    combo(&RIGHT),              // RIGHT
    NA,                         // END
    combo(&DOWN),               // DOWN
];

pub static KEYMAP: KeyMap = KeyMap::new(&CODES);

pub static SPECTRUM: TargetLayout = TargetLayout {
    name: "spectrum",
    keymap: &KEYMAP,
    joystick: [plain(Q), plain(A), plain(N), plain(M), plain(Z)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::*;
    use crate::mt88xx::ChipModel;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(SPECTRUM.translate(KEY_Q), Some(Key::Plain(Q)));
        assert_eq!(SPECTRUM.translate(KEY_B), Some(Key::Plain(B)));
        assert_eq!(SPECTRUM.translate(KEY_6), Some(Key::Plain(N6)));
        assert_eq!(SPECTRUM.translate(KEY_KP6), Some(Key::Plain(N6)));
        assert_eq!(SPECTRUM.translate(KEY_LEFTSHIFT), Some(Key::Plain(CAPS_SHIFT)));
    }

    #[test]
    fn test_specials() {
        assert_eq!(SPECTRUM.translate(KEY_DOT), Some(Key::Combo(&PERIOD)));
        assert_eq!(SPECTRUM.translate(KEY_BACKSPACE), Some(Key::Combo(&DELETE)));
        assert_eq!(SPECTRUM.translate(KEY_CAPSLOCK), Some(Key::Combo(&CAPS_LOCK)));
        assert!(CAPS_LOCK.is_toggle());
        assert_eq!(SPECTRUM.translate(KEY_F2), Some(Key::Macro(&FORMAT_SERIAL)));
        assert_eq!(SPECTRUM.translate(KEY_F3), Some(Key::Macro(&LOAD_SERIAL)));
    }

    #[test]
    fn test_unassigned() {
        assert_eq!(SPECTRUM.translate(KEY_ESC), None);
        assert_eq!(SPECTRUM.translate(KEY_F1), None);
        assert_eq!(SPECTRUM.translate(KEY_SLASH), None);
        assert_eq!(SPECTRUM.translate(KEY_PAGEDOWN), None);
        assert_eq!(KEYMAP.len(), usize::from(KEY_DOWN) + 1);
    }

    #[test]
    fn test_fits_every_chip() {
        for &chip in ChipModel::ALL {
            assert_eq!(SPECTRUM.validate(chip), Ok(()));
        }
    }
}
