//! Port bitmask to key event mapping

use keybridge_matrix::{Key, KeyAction, KeySink, JOYSTICK_BINDINGS};
use tracing::debug;

use crate::port::{JoystickDirection, JOYSTICK_ALL};

/// Keys bound to up, down, left, right and trigger
pub type JoystickMap = [Option<Key>; JOYSTICK_BINDINGS];

/// Tracks the joystick port and emits key events for every change
#[derive(Debug, Clone)]
pub struct JoystickMapper {
    map: JoystickMap,
    default: JoystickMap,
    /// Port value seen last, masked to the joystick lines
    state: u8,
}

impl JoystickMapper {
    /// Create a mapper with `default` as its built-in map
    pub fn new(default: JoystickMap) -> Self {
        Self {
            map: default,
            default,
            state: JOYSTICK_ALL,
        }
    }

    /// Restore the built-in map and assume all lines idle
    pub fn reset(&mut self) {
        debug!("Resetting joystick");
        self.map = self.default;
        self.state = JOYSTICK_ALL;
    }

    /// Replace the whole map
    pub fn set_map(&mut self, map: JoystickMap) {
        for dir in JoystickDirection::ALL {
            match map[dir.index()] {
                Some(key) => debug!("Joystick {} -> {}", dir.name(), key),
                None => debug!("Joystick {} unbound", dir.name()),
            }
        }
        self.map = map;
    }

    pub fn map(&self) -> &JoystickMap {
        &self.map
    }

    /// Compare `port` with the last value and emit one event per changed line,
    /// in up, down, left, right, trigger order
    pub fn process<K: KeySink + ?Sized>(&mut self, port: u8, sink: &mut K) {
        let port = port & JOYSTICK_ALL;
        let diff = port ^ self.state;
        if diff == 0 {
            return;
        }
        debug!("Joystick port: {:#07b}", port);

        for dir in JoystickDirection::ALL {
            let mask = dir.mask();
            if diff & mask == 0 {
                continue;
            }
            let action = if port & mask == 0 {
                KeyAction::Press
            } else {
                KeyAction::Release
            };
            sink.handle(self.map[dir.index()], action);
        }
        self.state = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::*;
    use keybridge_matrix::MatrixAddress;

    #[derive(Default)]
    struct Events(Vec<(Option<Key>, KeyAction)>);

    impl KeySink for Events {
        fn handle(&mut self, key: Option<Key>, action: KeyAction) {
            self.0.push((key, action));
        }
    }

    fn key(x: u8, y: u8) -> Option<Key> {
        Some(Key::Plain(MatrixAddress::at(x, y)))
    }

    fn default_map() -> JoystickMap {
        [key(1, 0), key(2, 0), key(7, 3), key(7, 2), key(5, 1)]
    }

    #[test]
    fn test_single_press_and_release() {
        let mut joy = JoystickMapper::new(default_map());
        let mut events = Events::default();

        joy.process(JOYSTICK_ALL & !JOYSTICK_UP, &mut events);
        assert_eq!(events.0, vec![(key(1, 0), KeyAction::Press)]);

        events.0.clear();
        joy.process(JOYSTICK_ALL, &mut events);
        assert_eq!(events.0, vec![(key(1, 0), KeyAction::Release)]);
    }

    #[test]
    fn test_unchanged_port_is_silent() {
        let mut joy = JoystickMapper::new(default_map());
        let mut events = Events::default();
        joy.process(JOYSTICK_ALL, &mut events);
        // bits above the joystick lines are ignored
        joy.process(0xE0 | JOYSTICK_ALL, &mut events);
        assert!(events.0.is_empty());
    }

    #[test]
    fn test_several_lines_in_order() {
        let mut joy = JoystickMapper::new(default_map());
        let mut events = Events::default();
        joy.process(JOYSTICK_ALL & !(JOYSTICK_TRIGGER | JOYSTICK_LEFT), &mut events);
        assert_eq!(
            events.0,
            vec![
                (key(7, 3), KeyAction::Press),
                (key(5, 1), KeyAction::Press),
            ]
        );
    }

    #[test]
    fn test_set_map_and_reset() {
        let mut joy = JoystickMapper::new(default_map());
        let custom = [key(0, 0); 5];
        joy.set_map(custom);
        assert_eq!(joy.map(), &custom);

        let mut events = Events::default();
        joy.process(JOYSTICK_ALL & !JOYSTICK_DOWN, &mut events);
        assert_eq!(events.0, vec![(key(0, 0), KeyAction::Press)]);

        joy.reset();
        assert_eq!(joy.map(), &default_map());
        // after reset the port is assumed idle again
        events.0.clear();
        joy.process(JOYSTICK_ALL, &mut events);
        assert!(events.0.is_empty());
    }
}
