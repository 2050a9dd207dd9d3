//! Keys and combos shared by the Sinclair ZX80 and ZX81
//!
//! ```text
//!        X0    X1    X2    X3    X4    X5    X6      X7
//!   Y0  SHIFT   A     Q     1     0     P   NEWLINE SPACE
//!   Y1    Z     S     W     2     9     O     L       .
//!   Y2    X     D     E     3     8     I     K       M
//!   Y3    C     F     R     4     7     U     J       N
//!   Y4    V     G     T     5     6     Y     H       B
//! ```
//!
//! X lines sit on address lines A8..A15, Y lines on data lines D0..D4.

use crate::address::MatrixAddress;
use crate::key::Combo;

const fn at(x: u8, y: u8) -> MatrixAddress {
    MatrixAddress::at(x, y)
}

pub const SHIFT: MatrixAddress = at(0, 0);
pub const Z: MatrixAddress = at(0, 1);
pub const X: MatrixAddress = at(0, 2);
pub const C: MatrixAddress = at(0, 3);
pub const V: MatrixAddress = at(0, 4);
pub const A: MatrixAddress = at(1, 0);
pub const S: MatrixAddress = at(1, 1);
pub const D: MatrixAddress = at(1, 2);
pub const F: MatrixAddress = at(1, 3);
pub const G: MatrixAddress = at(1, 4);
pub const Q: MatrixAddress = at(2, 0);
pub const W: MatrixAddress = at(2, 1);
pub const E: MatrixAddress = at(2, 2);
pub const R: MatrixAddress = at(2, 3);
pub const T: MatrixAddress = at(2, 4);
pub const N1: MatrixAddress = at(3, 0);
pub const N2: MatrixAddress = at(3, 1);
pub const N3: MatrixAddress = at(3, 2);
pub const N4: MatrixAddress = at(3, 3);
pub const N5: MatrixAddress = at(3, 4);
pub const N0: MatrixAddress = at(4, 0);
pub const N9: MatrixAddress = at(4, 1);
pub const N8: MatrixAddress = at(4, 2);
pub const N7: MatrixAddress = at(4, 3);
pub const N6: MatrixAddress = at(4, 4);
pub const P: MatrixAddress = at(5, 0);
pub const O: MatrixAddress = at(5, 1);
pub const I: MatrixAddress = at(5, 2);
pub const U: MatrixAddress = at(5, 3);
pub const Y: MatrixAddress = at(5, 4);
pub const NEWLINE: MatrixAddress = at(6, 0);
pub const L: MatrixAddress = at(6, 1);
pub const K: MatrixAddress = at(6, 2);
pub const J: MatrixAddress = at(6, 3);
pub const H: MatrixAddress = at(6, 4);
pub const SPACE: MatrixAddress = at(7, 0);
pub const DOT: MatrixAddress = at(7, 1);
pub const M: MatrixAddress = at(7, 2);
pub const N: MatrixAddress = at(7, 3);
pub const B: MatrixAddress = at(7, 4);

pub static LEFT: Combo = Combo::chord("left", &[SHIFT, N5]);
pub static DOWN: Combo = Combo::chord("down", &[SHIFT, N6]);
pub static UP: Combo = Combo::chord("up", &[SHIFT, N7]);
pub static RIGHT: Combo = Combo::chord("right", &[SHIFT, N8]);
pub static RUBOUT: Combo = Combo::chord("rubout", &[SHIFT, N0]);
pub static DOLLAR: Combo = Combo::chord("dollar", &[SHIFT, U]);
pub static OPEN_PAREN: Combo = Combo::chord("open paren", &[SHIFT, I]);
pub static CLOSE_PAREN: Combo = Combo::chord("close paren", &[SHIFT, O]);
pub static EXP: Combo = Combo::chord("exp", &[SHIFT, H]);
pub static MINUS: Combo = Combo::chord("minus", &[SHIFT, J]);
pub static PLUS: Combo = Combo::chord("plus", &[SHIFT, K]);
pub static EQUAL: Combo = Combo::chord("equal", &[SHIFT, L]);
pub static CAPS_LOCK: Combo = Combo::toggle("caps lock", &[SHIFT]);
pub static COLON: Combo = Combo::chord("colon", &[SHIFT, Z]);
pub static SEMICOLON: Combo = Combo::chord("semicolon", &[SHIFT, X]);
pub static QUESTION: Combo = Combo::chord("question mark", &[SHIFT, C]);
pub static SLASH: Combo = Combo::chord("slash", &[SHIFT, V]);
pub static LOWER: Combo = Combo::chord("less than", &[SHIFT, N]);
pub static GREATER: Combo = Combo::chord("greater than", &[SHIFT, M]);
pub static COMMA: Combo = Combo::chord("comma", &[SHIFT, DOT]);
pub static POUND: Combo = Combo::chord("pound", &[SHIFT, SPACE]);
