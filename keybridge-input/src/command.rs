//! What a front-end asks the adapter to do

use keybridge_joystick::JoystickMap;
use keybridge_matrix::{Key, KeyAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Input was consumed by the front-end itself
    #[default]
    None,
    /// Apply an action to a translated key; `None` is an unassigned code
    Key(Option<Key>, KeyAction),
    /// Open every crosspoint and restore the joystick defaults
    Reset,
    /// Install a freshly learned joystick map
    SetJoystickMap(JoystickMap),
}
