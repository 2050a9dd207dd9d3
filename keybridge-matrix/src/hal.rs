//! Hardware seams
//!
//! The engine and the MT88xx driver only talk to hardware through these
//! traits: [`ControlLines`] for the chip's input pins, [`Delay`] for busy
//! waits, and [`CrosspointSwitch`] for the driver as seen by the engine.
//! Firmware implements them on top of its port registers; host tools and
//! tests use recording or logging implementations.

use crate::address::MatrixAddress;

/// A control input of the crosspoint switch chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// X address bit 0..=3 (AX3 only exists on MT8812/MT8816)
    Ax(u8),
    /// Y address bit 0..=2
    Ay(u8),
    /// Level latched into the addressed crosspoint on strobe
    Data,
    Strobe,
    /// Opens all crosspoints while high
    Reset,
}

/// Drives the chip's control lines
pub trait ControlLines {
    /// Set `line` to logic high (`true`) or low (`false`)
    fn set(&mut self, line: Line, high: bool);
}

impl<T: ControlLines + ?Sized> ControlLines for &mut T {
    fn set(&mut self, line: Line, high: bool) {
        (**self).set(line, high)
    }
}

/// Blocking delays
pub trait Delay {
    fn delay_us(&mut self, us: u32);
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Delay backed by `std::thread::sleep`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// A crosspoint switch as driven by the engine
pub trait CrosspointSwitch {
    /// Number of X lines; valid addresses have `ax() < x_lines()`
    fn x_lines(&self) -> u8;

    /// Open all crosspoints
    fn reset(&mut self);

    /// Latch `closed` into the crosspoint at `address`
    fn set_switch(&mut self, address: MatrixAddress, closed: bool);
}

impl<T: CrosspointSwitch + ?Sized> CrosspointSwitch for &mut T {
    fn x_lines(&self) -> u8 {
        (**self).x_lines()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn set_switch(&mut self, address: MatrixAddress, closed: bool) {
        (**self).set_switch(address, closed)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_std_delay_sleeps() {
        let mut delay = StdDelay;
        let start = Instant::now();
        delay.delay_ms(5);
        delay.delay_us(500);
        assert!(start.elapsed().as_micros() >= 5_500);
    }
}
