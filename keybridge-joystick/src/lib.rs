//! Joystick port mapper
//!
//! Turns the bitmask read from a digital (Atari style) joystick port into
//! key presses and releases on the target keyboard, and collects new
//! bindings when the user teaches the mapper a key set.

pub mod learn;
pub mod mapper;
pub mod port;

pub use learn::MapLearner;
pub use mapper::{JoystickMap, JoystickMapper};
pub use port::{
    JoystickDirection, JOYSTICK_ALL, JOYSTICK_DOWN, JOYSTICK_LEFT, JOYSTICK_RIGHT,
    JOYSTICK_TRIGGER, JOYSTICK_UP,
};
