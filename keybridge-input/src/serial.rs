//! Serial front-end
//!
//! Receives decoded wire events from the host capture tool. F1 is reserved
//! for joystick learning: releasing it starts collecting, its press is
//! swallowed.

use keybridge_joystick::MapLearner;
use keybridge_matrix::keycodes::KEY_F1;
use keybridge_matrix::{KeyAction, KeyMap};
use tracing::{debug, trace};

use crate::command::Command;
use crate::wire::WireEvent;

/// Input code starting joystick learning
pub const LEARN_KEY: u8 = KEY_F1;

pub struct SerialFrontEnd {
    keymap: &'static KeyMap,
    learner: MapLearner,
    joystick: bool,
}

impl SerialFrontEnd {
    /// `joystick` tells whether a joystick port exists to learn a map for
    pub fn new(keymap: &'static KeyMap, joystick: bool) -> Self {
        Self {
            keymap,
            learner: MapLearner::new(),
            joystick,
        }
    }

    /// Abandon joystick learning
    pub fn reset(&mut self) {
        debug!("Resetting serial front-end");
        self.learner.cancel();
    }

    pub fn is_learning(&self) -> bool {
        self.learner.is_active()
    }

    pub fn process(&mut self, event: WireEvent) -> Command {
        let (pressed, code) = match event {
            WireEvent::Reset => return Command::Reset,
            WireEvent::Key { pressed, code } => (pressed, code),
        };
        let action = if pressed {
            KeyAction::Press
        } else {
            KeyAction::Release
        };
        let key = self.keymap.translate(code);
        trace!("Serial: {} code {} -> {:?}", action, code, key);

        if code == LEARN_KEY {
            if !pressed && self.joystick {
                self.learner.start();
            }
            return Command::None;
        }

        if !self.learner.is_active() {
            return Command::Key(key, action);
        }
        if pressed {
            return Command::None;
        }
        match self.learner.push(key) {
            Some(map) => Command::SetJoystickMap(map),
            None => Command::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keybridge_matrix::keycodes::*;
    use keybridge_matrix::targets::spectrum::{self, KEYMAP};
    use keybridge_matrix::Key;

    #[test]
    fn test_plain_key() {
        let mut fe = SerialFrontEnd::new(&KEYMAP, true);
        assert_eq!(
            fe.process(WireEvent::press(KEY_Q)),
            Command::Key(Some(Key::Plain(spectrum::Q)), KeyAction::Press)
        );
        assert_eq!(
            fe.process(WireEvent::release(KEY_ESC)),
            Command::Key(None, KeyAction::Release)
        );
        assert_eq!(fe.process(WireEvent::Reset), Command::Reset);
    }

    #[test]
    fn test_learn_joystick_map() {
        let mut fe = SerialFrontEnd::new(&KEYMAP, true);
        assert_eq!(fe.process(WireEvent::press(KEY_F1)), Command::None);
        assert!(!fe.is_learning());
        assert_eq!(fe.process(WireEvent::release(KEY_F1)), Command::None);
        assert!(fe.is_learning());

        let codes = [KEY_O, KEY_P, KEY_Q, KEY_A, KEY_SPACE];
        let mut last = Command::None;
        for code in codes {
            assert_eq!(fe.process(WireEvent::press(code)), Command::None);
            last = fe.process(WireEvent::release(code));
        }
        assert_eq!(
            last,
            Command::SetJoystickMap([
                Some(Key::Plain(spectrum::O)),
                Some(Key::Plain(spectrum::P)),
                Some(Key::Plain(spectrum::Q)),
                Some(Key::Plain(spectrum::A)),
                Some(Key::Plain(spectrum::SPACE)),
            ])
        );
        assert!(!fe.is_learning());
        assert!(matches!(
            fe.process(WireEvent::press(KEY_Q)),
            Command::Key(Some(_), KeyAction::Press)
        ));
    }

    #[test]
    fn test_no_learning_without_joystick() {
        let mut fe = SerialFrontEnd::new(&KEYMAP, false);
        assert_eq!(fe.process(WireEvent::release(KEY_F1)), Command::None);
        assert!(!fe.is_learning());
    }

    #[test]
    fn test_reset_cancels_learning() {
        let mut fe = SerialFrontEnd::new(&KEYMAP, true);
        fe.process(WireEvent::release(KEY_F1));
        fe.reset();
        assert!(!fe.is_learning());
    }
}
