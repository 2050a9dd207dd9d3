//! Sinclair ZX80
//!
//! Builds on the key positions shared with the ZX81 (see [`super::zx8x`]).
//! F3 types `LOAD ""`.

pub use super::zx8x::*;
use crate::key::{combo, macro_key, plain, Combo, Key, Macro, Stroke, NA};
use crate::keymap::KeyMap;
use crate::layout::TargetLayout;

pub static HOME: Combo = Combo::chord("home", &[SHIFT, N9]);
pub static DOUBLE_QUOTE: Combo = Combo::chord("double quote", &[SHIFT, Y]);
pub static ASTERISK: Combo = Combo::chord("asterisk", &[SHIFT, P]);
pub static EDIT: Combo = Combo::chord("edit", &[SHIFT, NEWLINE]);

/// `LOAD ""`
pub static LOAD: Macro = Macro {
    name: "load",
    strokes: &[
        Stroke::Plain(W),
        Stroke::Combo(&DOUBLE_QUOTE),
        Stroke::Combo(&DOUBLE_QUOTE),
    ],
};

static CODES: [Option<Key>; 112] = [
    NA,                     // RESERVED
    NA,                     // ESC
    plain(N1),              // 1
    plain(N2),              // 2
    plain(N3),              // 3
    plain(N4),              // 4
    plain(N5),              // 5
    plain(N6),              // 6
    plain(N7),              // 7
    plain(N8),              // 8
    plain(N9),              // 9
    plain(N0),              // 0
    combo(&MINUS),          // MINUS
    combo(&EQUAL),          // EQUAL
    combo(&RUBOUT),         // BACKSPACE
    combo(&EDIT),           // TAB
    plain(Q),               // Q
    plain(W),               // W
    plain(E),               // E
    plain(R),               // R
    plain(T),               // T
    plain(Y),               // Y
    plain(U),               // U
    plain(I),               // I
    plain(O),               // O
    plain(P),               // P
    combo(&OPEN_PAREN),     // LEFTBRACE
    combo(&CLOSE_PAREN),    // RIGHTBRACE
    plain(NEWLINE),         // ENTER
    NA,                     // LEFTCTRL
    plain(A),               // A
    plain(S),               // S
    plain(D),               // D
    plain(F),               // F
    plain(G),               // G
    plain(H),               // H
    plain(J),               // J
    plain(K),               // K
    plain(L),               // L
    combo(&SEMICOLON),      // SEMICOLON
    combo(&DOUBLE_QUOTE),   // APOSTROPHE
    combo(&EXP),            // GRAVE
    plain(SHIFT),           // LEFTSHIFT
    combo(&QUESTION),       // BACKSLASH
    plain(Z),               // Z
    plain(X),               // X
    plain(C),               // C
    plain(V),               // V
    plain(B),               // B
    plain(N),               // N
    plain(M),               // M
    combo(&COMMA),          // COMMA
    plain(DOT),             // DOT
    combo(&SLASH),          // SLASH
    plain(SHIFT),           // RIGHTSHIFT
    combo(&ASTERISK),       // KPASTERISK
    NA,                     // LEFTALT
    plain(SPACE),           // SPACE
    combo(&CAPS_LOCK),      // CAPSLOCK
    NA,                     // F1
    NA,                     // F2
    macro_key(&LOAD),       // F3
    NA,                     // F4
    NA,                     // F5
    NA,                     // F6
    NA,                     // F7
    NA,                     // F8
    NA,                     // F9
    NA,                     // F10
    NA,                     // NUMLOCK
    NA,                     // SCROLLLOCK
    plain(N7),              // KP7
    plain(N8),              // KP8
    plain(N9),              // KP9
    combo(&MINUS),          // KPMINUS
    plain(N4),              // KP4
    plain(N5),              // KP5
    plain(N6),              // KP6
    combo(&PLUS),           // KPPLUS
    plain(N1),              // KP1
    plain(N2),              // KP2
    plain(N3),              // KP3
    plain(N0),              // KP0
    plain(DOT),             // KPDOT
    NA,                     // (84)
    NA,                     // ZENKAKUHANKAKU
    NA,                     // 102ND
    NA,                     // F11
    NA,                     // F12
    NA,                     // RO
    NA,                     // KATAKANA
    NA,                     // HIRAGANA
    NA,                     // HENKAN
    NA,                     // KATAKANAHIRAGANA
    NA,                     // MUHENKAN
    NA,                     // KPJPCOMMA
    plain(NEWLINE),         // KPENTER
    NA,                     // RIGHTCTRL
    combo(&SLASH),          // KPSLASH
    NA,                     // SYSRQ
    NA,                     // RIGHTALT
    NA,                     // LINEFEED
    combo(&HOME),           // HOME
    combo(&UP),             // UP
    NA,                     // PAGEUP
    combo(&LEFT),           // LEFT
    combo(&RIGHT),          // RIGHT
    NA,                     // END
    combo(&DOWN),           // DOWN
    NA,                     // PAGEDOWN
    NA,                     // INSERT
    combo(&RUBOUT),         // DELETE
];

pub static KEYMAP: KeyMap = KeyMap::new(&CODES);

pub static ZX80: TargetLayout = TargetLayout {
    name: "zx80",
    keymap: &KEYMAP,
    joystick: [plain(Q), plain(A), plain(N), plain(M), plain(Z)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::*;
    use crate::mt88xx::ChipModel;

    #[test]
    fn test_translate() {
        assert_eq!(ZX80.translate(KEY_LEFTSHIFT), Some(Key::Plain(SHIFT)));
        assert_eq!(ZX80.translate(KEY_DOT), Some(Key::Plain(DOT)));
        assert_eq!(ZX80.translate(KEY_0), Some(Key::Plain(N0)));
        assert_eq!(ZX80.translate(KEY_TAB), Some(Key::Combo(&EDIT)));
        assert_eq!(ZX80.translate(KEY_DELETE), Some(Key::Combo(&RUBOUT)));
        assert_eq!(ZX80.translate(KEY_F3), Some(Key::Macro(&LOAD)));
        assert_eq!(ZX80.translate(KEY_LEFTCTRL), None);
    }

    #[test]
    fn test_table_covers_delete() {
        assert_eq!(KEYMAP.len(), usize::from(KEY_DELETE) + 1);
    }

    #[test]
    fn test_fits_every_chip() {
        for &chip in ChipModel::ALL {
            assert_eq!(ZX80.validate(chip), Ok(()));
        }
    }
}
