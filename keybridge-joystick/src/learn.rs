//! Joystick map learning
//!
//! The user starts learning with a dedicated key, then presses and releases
//! the five keys to bind to up, down, left, right and trigger. Only releases
//! count, so a key is bound once it's let go.

use keybridge_matrix::{Key, JOYSTICK_BINDINGS};
use tracing::{debug, info};

use crate::mapper::JoystickMap;
use crate::port::JoystickDirection;

#[derive(Debug, Clone, Default)]
pub struct MapLearner {
    active: bool,
    collected: JoystickMap,
    count: usize,
}

impl MapLearner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin collecting a new map, discarding any partial one
    pub fn start(&mut self) {
        info!("Learning joystick map, press keys for up, down, left, right, trigger");
        self.active = true;
        self.collected = [None; JOYSTICK_BINDINGS];
        self.count = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cancel(&mut self) {
        if self.active {
            debug!("Joystick learning cancelled after {} keys", self.count);
        }
        self.active = false;
        self.count = 0;
    }

    /// Record a released key. Returns the complete map after the fifth one.
    ///
    /// Unassigned keys are recorded as well and leave that direction unbound.
    pub fn push(&mut self, key: Option<Key>) -> Option<JoystickMap> {
        if !self.active {
            return None;
        }
        let dir = JoystickDirection::ALL[self.count];
        match key {
            Some(key) => debug!("Learned joystick {}: {}", dir.name(), key),
            None => debug!("Learned joystick {}: unassigned", dir.name()),
        }
        self.collected[self.count] = key;
        self.count += 1;

        if self.count < JOYSTICK_BINDINGS {
            return None;
        }
        info!("Joystick map complete");
        self.active = false;
        self.count = 0;
        Some(self.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keybridge_matrix::MatrixAddress;

    fn key(x: u8) -> Option<Key> {
        Some(Key::Plain(MatrixAddress::at(x, 0)))
    }

    #[test]
    fn test_inactive_ignores_keys() {
        let mut learner = MapLearner::new();
        assert!(!learner.is_active());
        assert_eq!(learner.push(key(1)), None);
    }

    #[test]
    fn test_collects_five_keys() {
        let mut learner = MapLearner::new();
        learner.start();
        for x in 0..4 {
            assert_eq!(learner.push(key(x)), None);
            assert!(learner.is_active());
        }
        let map = learner.push(None);
        assert_eq!(map, Some([key(0), key(1), key(2), key(3), None]));
        assert!(!learner.is_active());
    }

    #[test]
    fn test_restart_discards_partial_map() {
        let mut learner = MapLearner::new();
        learner.start();
        learner.push(key(7));
        learner.start();
        for x in 0..4 {
            learner.push(key(x));
        }
        assert_eq!(learner.push(key(4)).map(|m| m[0]), Some(key(0)));
    }

    #[test]
    fn test_cancel() {
        let mut learner = MapLearner::new();
        learner.start();
        learner.push(key(1));
        learner.cancel();
        assert!(!learner.is_active());
        assert_eq!(learner.push(key(2)), None);
    }
}
