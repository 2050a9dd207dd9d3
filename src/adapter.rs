//! The adapter: engine, joystick and front-ends wired together
//!
//! This is the firmware's main loop minus the hardware polling. Callers
//! feed it serial bytes, PS/2 codes and joystick port values; the adapter
//! routes front-end commands to the engine and keeps the joystick map up
//! to date.

use keybridge_input::{
    reset_keyboard, Command, InputError, Ps2FrontEnd, Ps2Port, SerialFrontEnd, WireDecoder,
};
use keybridge_joystick::JoystickMapper;
use keybridge_matrix::{CrosspointSwitch, Delay, KeySink, TargetKeyboard, TargetLayout};
use tracing::{debug, info, warn};

pub struct Adapter<S, D> {
    layout: &'static TargetLayout,
    keyboard: TargetKeyboard<S, D>,
    joystick: Option<JoystickMapper>,
    serial: SerialFrontEnd,
    ps2: Ps2FrontEnd,
    decoder: WireDecoder,
}

impl<S: CrosspointSwitch, D: Delay> Adapter<S, D> {
    /// Wire up an adapter for `layout`. `joystick` enables the joystick port.
    ///
    /// The layout is checked against the switch; problems are logged, and
    /// are fatal in debug builds. Call [`reset`](Self::reset) before use.
    pub fn new(layout: &'static TargetLayout, switch: S, delay: D, joystick: bool) -> Self {
        let check = layout.validate_x_lines(switch.x_lines());
        if let Err(e) = &check {
            warn!("Layout {}: {}", layout.name, e);
        }
        debug_assert!(check.is_ok(), "invalid layout {}", layout.name);

        info!(
            "Adapter for {} ({} X lines, joystick {})",
            layout.name,
            switch.x_lines(),
            if joystick { "on" } else { "off" }
        );
        Self {
            layout,
            keyboard: TargetKeyboard::new(switch, delay),
            joystick: joystick.then(|| JoystickMapper::new(layout.joystick)),
            serial: SerialFrontEnd::new(layout.keymap, joystick),
            ps2: Ps2FrontEnd::new(layout.keymap, joystick),
            decoder: WireDecoder::new(),
        }
    }

    pub fn layout(&self) -> &'static TargetLayout {
        self.layout
    }

    pub fn keyboard(&self) -> &TargetKeyboard<S, D> {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut TargetKeyboard<S, D> {
        &mut self.keyboard
    }

    pub fn joystick(&self) -> Option<&JoystickMapper> {
        self.joystick.as_ref()
    }

    pub fn into_keyboard(self) -> TargetKeyboard<S, D> {
        self.keyboard
    }

    /// Back to the power-on state: all keys open, default joystick map,
    /// front-ends idle
    pub fn reset(&mut self) {
        info!("Resetting adapter");
        self.keyboard.reset();
        if let Some(joystick) = &mut self.joystick {
            joystick.reset();
        }
        self.serial.reset();
        self.ps2.reset();
        self.decoder.reset();
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Key(key, action) => self.keyboard.handle(key, action),
            Command::Reset => self.reset(),
            Command::SetJoystickMap(map) => match &mut self.joystick {
                Some(joystick) => joystick.set_map(map),
                None => debug!("No joystick, dropping new map"),
            },
        }
    }

    /// Process bytes received from the serial port
    pub fn feed_serial(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match self.decoder.push(byte) {
                Ok(Some(event)) => {
                    let command = self.serial.process(event);
                    self.apply(command);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping serial frame: {}", e),
            }
        }
    }

    /// Process one code from the PS/2 keyboard
    pub fn feed_ps2(&mut self, code: u16) -> Command {
        let command = self.ps2.process(code);
        self.apply(command);
        command
    }

    /// Read one code from the PS/2 port, if any, and process it.
    ///
    /// A reset requested from the keyboard also resets the keyboard itself.
    pub fn poll_ps2<P: Ps2Port + ?Sized>(&mut self, port: &mut P) -> Result<(), InputError> {
        let Some(code) = port.read() else {
            return Ok(());
        };
        if self.feed_ps2(code) == Command::Reset {
            reset_keyboard(port, self.keyboard.delay_mut())?;
        }
        Ok(())
    }

    /// Process the current joystick port value
    pub fn poll_joystick(&mut self, port: u8) {
        if let Some(joystick) = &mut self.joystick {
            joystick.process(port, &mut self.keyboard);
        }
    }
}
