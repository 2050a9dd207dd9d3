//! Joystick port bits
//!
//! Lines are active low: a bit reads 0 while the switch is closed.

pub const JOYSTICK_UP: u8 = 0b0000_0001;
pub const JOYSTICK_DOWN: u8 = 0b0000_0010;
pub const JOYSTICK_LEFT: u8 = 0b0000_0100;
pub const JOYSTICK_RIGHT: u8 = 0b0000_1000;
pub const JOYSTICK_TRIGGER: u8 = 0b0001_0000;

/// All lines idle
pub const JOYSTICK_ALL: u8 = 0b0001_1111;

/// One switch of the joystick, in binding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickDirection {
    Up,
    Down,
    Left,
    Right,
    Trigger,
}

impl JoystickDirection {
    pub const ALL: [JoystickDirection; 5] = [
        JoystickDirection::Up,
        JoystickDirection::Down,
        JoystickDirection::Left,
        JoystickDirection::Right,
        JoystickDirection::Trigger,
    ];

    /// Port bit for this switch
    pub const fn mask(self) -> u8 {
        match self {
            JoystickDirection::Up => JOYSTICK_UP,
            JoystickDirection::Down => JOYSTICK_DOWN,
            JoystickDirection::Left => JOYSTICK_LEFT,
            JoystickDirection::Right => JOYSTICK_RIGHT,
            JoystickDirection::Trigger => JOYSTICK_TRIGGER,
        }
    }

    /// Slot in a joystick map
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            JoystickDirection::Up => "up",
            JoystickDirection::Down => "down",
            JoystickDirection::Left => "left",
            JoystickDirection::Right => "right",
            JoystickDirection::Trigger => "trigger",
        }
    }
}
