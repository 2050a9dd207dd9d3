//! PS/2 keyboard front-end
//!
//! Codes come from a PS/2 decoding layer that already resolves scan code
//! sets into one 16 bit value per event: the low byte is a key code of its
//! own numbering, the high byte carries flags, [`PS2_BREAK`] among them.
//! We translate the low byte into a Linux input code and then through the
//! target key map, like the serial front-end does.
//!
//! Two keys are reserved on release: ESC resets the adapter, F1 starts
//! joystick learning.

use keybridge_joystick::MapLearner;
use keybridge_matrix::keycodes::*;
use keybridge_matrix::{Delay, KeyAction, KeyMap};
use tracing::{debug, info, trace, warn};

use crate::command::Command;
use crate::error::InputError;

/// Set on key release
pub const PS2_BREAK: u16 = 0x8000;

/// PS/2 code of ESC
pub const PS2_KEY_ESC: u8 = 0x1B;

/// PS/2 code of F1
pub const PS2_KEY_F1: u8 = 0x61;

/// Keyboard reply to a successful reset (basic assurance test passed)
pub const PS2_RESET_OK: u16 = 0xAA;

/// Keyboard reply to a failed self test
pub const PS2_RESET_FAILED: u16 = 0xFC;

pub const PS2_LOCK_SCROLL: u8 = 0x01;
pub const PS2_LOCK_NUM: u8 = 0x02;
pub const PS2_LOCK_CAPS: u8 = 0x04;

/// How long to wait for the keyboard to answer a reset
pub const RESET_TIMEOUT_MS: u32 = 3000;

/// Polling interval while waiting for the reset reply
pub const RESET_POLL_MS: u32 = 250;

/// PS/2 key code to Linux input code, indexed by PS/2 code
static PS2_TO_INPUT: [u8; 109] = [
    KEY_RESERVED,   // 0x00
    KEY_NUMLOCK,    // 0x01
    KEY_SCROLLLOCK, // 0x02
    KEY_CAPSLOCK,   // 0x03
    KEY_PRINT,      // 0x04 print screen
    KEY_PAUSE,      // 0x05
    KEY_LEFTSHIFT,  // 0x06
    KEY_RIGHTSHIFT, // 0x07
    KEY_LEFTCTRL,   // 0x08
    KEY_RIGHTCTRL,  // 0x09
    KEY_LEFTALT,    // 0x0A
    KEY_RIGHTALT,   // 0x0B
    KEY_LEFTMETA,   // 0x0C
    KEY_RIGHTMETA,  // 0x0D
    KEY_MENU,       // 0x0E
    KEY_PAUSE,      // 0x0F break
    KEY_SYSRQ,      // 0x10
    KEY_HOME,       // 0x11
    KEY_END,        // 0x12
    KEY_PAGEUP,     // 0x13
    KEY_PAGEDOWN,   // 0x14
    KEY_LEFT,       // 0x15
    KEY_RIGHT,      // 0x16
    KEY_UP,         // 0x17
    KEY_DOWN,       // 0x18
    KEY_INSERT,     // 0x19
    KEY_DELETE,     // 0x1A
    KEY_ESC,        // 0x1B
    KEY_BACKSPACE,  // 0x1C
    KEY_TAB,        // 0x1D
    KEY_ENTER,      // 0x1E
    KEY_SPACE,      // 0x1F
    KEY_KP0,        // 0x20
    KEY_KP1,        // 0x21
    KEY_KP2,        // 0x22
    KEY_KP3,        // 0x23
    KEY_KP4,        // 0x24
    KEY_KP5,        // 0x25
    KEY_KP6,        // 0x26
    KEY_KP7,        // 0x27
    KEY_KP8,        // 0x28
    KEY_KP9,        // 0x29
    KEY_KPDOT,      // 0x2A
    KEY_KPENTER,    // 0x2B
    KEY_KPPLUS,     // 0x2C
    KEY_KPMINUS,    // 0x2D
    KEY_KPASTERISK, // 0x2E
    KEY_KPSLASH,    // 0x2F
    KEY_0,          // 0x30
    KEY_1,          // 0x31
    KEY_2,          // 0x32
    KEY_3,          // 0x33
    KEY_4,          // 0x34
    KEY_5,          // 0x35
    KEY_6,          // 0x36
    KEY_7,          // 0x37
    KEY_8,          // 0x38
    KEY_9,          // 0x39
    KEY_APOSTROPHE, // 0x3A
    KEY_COMMA,      // 0x3B
    KEY_MINUS,      // 0x3C
    KEY_DOT,        // 0x3D
    KEY_SLASH,      // 0x3E
    KEY_KPEQUAL,    // 0x3F
    KEY_APOSTROPHE, // 0x40 single quote
    KEY_A,          // 0x41
    KEY_B,          // 0x42
    KEY_C,          // 0x43
    KEY_D,          // 0x44
    KEY_E,          // 0x45
    KEY_F,          // 0x46
    KEY_G,          // 0x47
    KEY_H,          // 0x48
    KEY_I,          // 0x49
    KEY_J,          // 0x4A
    KEY_K,          // 0x4B
    KEY_L,          // 0x4C
    KEY_M,          // 0x4D
    KEY_N,          // 0x4E
    KEY_O,          // 0x4F
    KEY_P,          // 0x50
    KEY_Q,          // 0x51
    KEY_R,          // 0x52
    KEY_S,          // 0x53
    KEY_T,          // 0x54
    KEY_U,          // 0x55
    KEY_V,          // 0x56
    KEY_W,          // 0x57
    KEY_X,          // 0x58
    KEY_Y,          // 0x59
    KEY_Z,          // 0x5A
    KEY_SEMICOLON,  // 0x5B
    KEY_BACKSLASH,  // 0x5C
    KEY_LEFTBRACE,  // 0x5D
    KEY_RIGHTBRACE, // 0x5E
    KEY_EQUAL,      // 0x5F
    KEY_KPCOMMA,    // 0x60
    KEY_F1,         // 0x61
    KEY_F2,         // 0x62
    KEY_F3,         // 0x63
    KEY_F4,         // 0x64
    KEY_F5,         // 0x65
    KEY_F6,         // 0x66
    KEY_F7,         // 0x67
    KEY_F8,         // 0x68
    KEY_F9,         // 0x69
    KEY_F10,        // 0x6A
    KEY_F11,        // 0x6B
    KEY_F12,        // 0x6C
];

/// Translate a PS/2 key code to a Linux input code; unknown codes give
/// `KEY_RESERVED`
pub fn to_input_code(ps2_code: u8) -> u8 {
    PS2_TO_INPUT
        .get(usize::from(ps2_code))
        .copied()
        .unwrap_or(KEY_RESERVED)
}

/// Access to a PS/2 keyboard
pub trait Ps2Port {
    /// Next code from the keyboard, `None` when nothing is pending
    fn read(&mut self) -> Option<u16>;

    /// Send the reset command
    fn send_reset(&mut self);

    /// Set the lock LEDs, a combination of `PS2_LOCK_*`
    fn set_lock(&mut self, locks: u8);

    /// Enable or disable suppression of typematic repeats
    fn set_no_repeat(&mut self, no_repeat: bool);
}

impl<T: Ps2Port + ?Sized> Ps2Port for &mut T {
    fn read(&mut self) -> Option<u16> {
        (**self).read()
    }

    fn send_reset(&mut self) {
        (**self).send_reset()
    }

    fn set_lock(&mut self, locks: u8) {
        (**self).set_lock(locks)
    }

    fn set_no_repeat(&mut self, no_repeat: bool) {
        (**self).set_no_repeat(no_repeat)
    }
}

/// Reset the keyboard and wait for its self test result.
///
/// On success Num Lock is switched on and typematic repeat off, since the
/// target does its own key repeat.
pub fn reset_keyboard<P, D>(port: &mut P, delay: &mut D) -> Result<(), InputError>
where
    P: Ps2Port + ?Sized,
    D: Delay + ?Sized,
{
    debug!("Resetting PS/2 keyboard");
    port.send_reset();

    let mut waited = 0;
    while waited < RESET_TIMEOUT_MS {
        match port.read() {
            Some(PS2_RESET_OK) => {
                info!("PS/2 keyboard ready");
                port.set_lock(PS2_LOCK_NUM);
                port.set_no_repeat(true);
                return Ok(());
            }
            Some(PS2_RESET_FAILED) => {
                warn!("PS/2 keyboard self test failed");
                return Err(InputError::SelfTestFailed);
            }
            Some(other) => trace!("Ignoring PS/2 code 0x{:04X} during reset", other),
            None => {}
        }
        delay.delay_ms(RESET_POLL_MS);
        waited += RESET_POLL_MS;
    }
    warn!("No PS/2 keyboard attached");
    Err(InputError::NotAttached)
}

pub struct Ps2FrontEnd {
    keymap: &'static KeyMap,
    learner: MapLearner,
    joystick: bool,
}

impl Ps2FrontEnd {
    /// `joystick` tells whether a joystick port exists to learn a map for
    pub fn new(keymap: &'static KeyMap, joystick: bool) -> Self {
        Self {
            keymap,
            learner: MapLearner::new(),
            joystick,
        }
    }

    pub fn reset(&mut self) {
        debug!("Resetting PS/2 front-end");
        self.learner.cancel();
    }

    pub fn is_learning(&self) -> bool {
        self.learner.is_active()
    }

    /// Read and process one code, if the keyboard has any
    pub fn poll<P: Ps2Port + ?Sized>(&mut self, port: &mut P) -> Command {
        match port.read() {
            Some(code) => self.process(code),
            None => Command::None,
        }
    }

    /// Process one 16 bit code from the PS/2 layer
    pub fn process(&mut self, code: u16) -> Command {
        if code == 0 {
            return Command::None;
        }
        let released = code & PS2_BREAK != 0;
        let ps2_code = (code & 0xFF) as u8;

        if self.learner.is_active() {
            if !released {
                return Command::None;
            }
            let key = self.keymap.translate(to_input_code(ps2_code));
            return match self.learner.push(key) {
                Some(map) => Command::SetJoystickMap(map),
                None => Command::None,
            };
        }

        if released {
            match ps2_code {
                PS2_KEY_ESC => return Command::Reset,
                PS2_KEY_F1 => {
                    if self.joystick {
                        self.learner.start();
                    }
                    return Command::None;
                }
                _ => {}
            }
        }

        let input = to_input_code(ps2_code);
        let key = self.keymap.translate(input);
        let action = if released {
            KeyAction::Release
        } else {
            KeyAction::Press
        };
        trace!(
            "PS/2: flags 0x{:02X}, {} code {} -> {:?}",
            code >> 8,
            action,
            input,
            key
        );
        Command::Key(key, action)
    }
}
