//! Linux input key codes
//!
//! The normalized input codes every front-end produces. Values are those of
//! `linux/input-event-codes.h`, so evdev codes can be forwarded unchanged.
//! Only the range target tables can index (below 128) plus the handful of
//! codes above it that keyboards commonly send are listed.

macro_rules! key_codes {
    ($($name:ident = $code:expr, $label:literal;)*) => {
        $(pub const $name: u8 = $code;)*

        const NAMES: &[(u8, &str)] = &[$(($code, $label),)*];
    };
}

key_codes! {
    KEY_RESERVED = 0, "RESERVED";
    KEY_ESC = 1, "ESC";
    KEY_1 = 2, "1";
    KEY_2 = 3, "2";
    KEY_3 = 4, "3";
    KEY_4 = 5, "4";
    KEY_5 = 6, "5";
    KEY_6 = 7, "6";
    KEY_7 = 8, "7";
    KEY_8 = 9, "8";
    KEY_9 = 10, "9";
    KEY_0 = 11, "0";
    KEY_MINUS = 12, "MINUS";
    KEY_EQUAL = 13, "EQUAL";
    KEY_BACKSPACE = 14, "BACKSPACE";
    KEY_TAB = 15, "TAB";
    KEY_Q = 16, "Q";
    KEY_W = 17, "W";
    KEY_E = 18, "E";
    KEY_R = 19, "R";
    KEY_T = 20, "T";
    KEY_Y = 21, "Y";
    KEY_U = 22, "U";
    KEY_I = 23, "I";
    KEY_O = 24, "O";
    KEY_P = 25, "P";
    KEY_LEFTBRACE = 26, "LEFTBRACE";
    KEY_RIGHTBRACE = 27, "RIGHTBRACE";
    KEY_ENTER = 28, "ENTER";
    KEY_LEFTCTRL = 29, "LEFTCTRL";
    KEY_A = 30, "A";
    KEY_S = 31, "S";
    KEY_D = 32, "D";
    KEY_F = 33, "F";
    KEY_G = 34, "G";
    KEY_H = 35, "H";
    KEY_J = 36, "J";
    KEY_K = 37, "K";
    KEY_L = 38, "L";
    KEY_SEMICOLON = 39, "SEMICOLON";
    KEY_APOSTROPHE = 40, "APOSTROPHE";
    KEY_GRAVE = 41, "GRAVE";
    KEY_LEFTSHIFT = 42, "LEFTSHIFT";
    KEY_BACKSLASH = 43, "BACKSLASH";
    KEY_Z = 44, "Z";
    KEY_X = 45, "X";
    KEY_C = 46, "C";
    KEY_V = 47, "V";
    KEY_B = 48, "B";
    KEY_N = 49, "N";
    KEY_M = 50, "M";
    KEY_COMMA = 51, "COMMA";
    KEY_DOT = 52, "DOT";
    KEY_SLASH = 53, "SLASH";
    KEY_RIGHTSHIFT = 54, "RIGHTSHIFT";
    KEY_KPASTERISK = 55, "KPASTERISK";
    KEY_LEFTALT = 56, "LEFTALT";
    KEY_SPACE = 57, "SPACE";
    KEY_CAPSLOCK = 58, "CAPSLOCK";
    KEY_F1 = 59, "F1";
    KEY_F2 = 60, "F2";
    KEY_F3 = 61, "F3";
    KEY_F4 = 62, "F4";
    KEY_F5 = 63, "F5";
    KEY_F6 = 64, "F6";
    KEY_F7 = 65, "F7";
    KEY_F8 = 66, "F8";
    KEY_F9 = 67, "F9";
    KEY_F10 = 68, "F10";
    KEY_NUMLOCK = 69, "NUMLOCK";
    KEY_SCROLLLOCK = 70, "SCROLLLOCK";
    KEY_KP7 = 71, "KP7";
    KEY_KP8 = 72, "KP8";
    KEY_KP9 = 73, "KP9";
    KEY_KPMINUS = 74, "KPMINUS";
    KEY_KP4 = 75, "KP4";
    KEY_KP5 = 76, "KP5";
    KEY_KP6 = 77, "KP6";
    KEY_KPPLUS = 78, "KPPLUS";
    KEY_KP1 = 79, "KP1";
    KEY_KP2 = 80, "KP2";
    KEY_KP3 = 81, "KP3";
    KEY_KP0 = 82, "KP0";
    KEY_KPDOT = 83, "KPDOT";
    KEY_ZENKAKUHANKAKU = 85, "ZENKAKUHANKAKU";
    KEY_102ND = 86, "102ND";
    KEY_F11 = 87, "F11";
    KEY_F12 = 88, "F12";
    KEY_RO = 89, "RO";
    KEY_KATAKANA = 90, "KATAKANA";
    KEY_HIRAGANA = 91, "HIRAGANA";
    KEY_HENKAN = 92, "HENKAN";
    KEY_KATAKANAHIRAGANA = 93, "KATAKANAHIRAGANA";
    KEY_MUHENKAN = 94, "MUHENKAN";
    KEY_KPJPCOMMA = 95, "KPJPCOMMA";
    KEY_KPENTER = 96, "KPENTER";
    KEY_RIGHTCTRL = 97, "RIGHTCTRL";
    KEY_KPSLASH = 98, "KPSLASH";
    KEY_SYSRQ = 99, "SYSRQ";
    KEY_RIGHTALT = 100, "RIGHTALT";
    KEY_LINEFEED = 101, "LINEFEED";
    KEY_HOME = 102, "HOME";
    KEY_UP = 103, "UP";
    KEY_PAGEUP = 104, "PAGEUP";
    KEY_LEFT = 105, "LEFT";
    KEY_RIGHT = 106, "RIGHT";
    KEY_END = 107, "END";
    KEY_DOWN = 108, "DOWN";
    KEY_PAGEDOWN = 109, "PAGEDOWN";
    KEY_INSERT = 110, "INSERT";
    KEY_DELETE = 111, "DELETE";
    KEY_KPEQUAL = 117, "KPEQUAL";
    KEY_PAUSE = 119, "PAUSE";
    KEY_KPCOMMA = 121, "KPCOMMA";
    KEY_LEFTMETA = 125, "LEFTMETA";
    KEY_RIGHTMETA = 126, "RIGHTMETA";
    KEY_COMPOSE = 127, "COMPOSE";
    KEY_MENU = 139, "MENU";
    KEY_PRINT = 210, "PRINT";
}

/// Name of a key code without the `KEY_` prefix, e.g. `"LEFTSHIFT"`
pub fn name(code: u8) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Look up a key code by name, with or without the `KEY_` prefix
pub fn from_name(name: &str) -> Option<u8> {
    let name = name.strip_prefix("KEY_").unwrap_or(name);
    NAMES
        .iter()
        .find(|(_, label)| label.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        assert_eq!(name(KEY_LEFTSHIFT), Some("LEFTSHIFT"));
        assert_eq!(name(KEY_F1), Some("F1"));
        assert_eq!(name(84), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("KEY_SPACE"), Some(KEY_SPACE));
        assert_eq!(from_name("capslock"), Some(KEY_CAPSLOCK));
        assert_eq!(from_name("0"), Some(KEY_0));
        assert_eq!(from_name("NOPE"), None);
    }

    #[test]
    fn test_codes_are_unique() {
        for (ix, (code, _)) in NAMES.iter().enumerate() {
            assert!(NAMES[ix + 1..].iter().all(|(c, _)| c != code));
        }
    }
}
