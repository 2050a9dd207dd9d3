//! MT88xx analog crosspoint switch driver
//!
//! Setting a crosspoint: put the address on AX/AY, the desired level on
//! DATA, then pulse STROBE. The data sheet asks for a strobe width of at
//! least 20ns; we hold it for [`STROBE_HOLD_US`], the smallest delay that
//! common microcontroller timers produce reliably.
//!
//! The chips differ in how X lines are addressed. The MT8808 has 8 X lines
//! and three AX pins. MT8812 and MT8816 have four AX pins, and their X6..X11
//! sit at AX codes 8..13, with codes 6 and 7 being unused on the MT8812 and
//! X12/X13 on the MT8816.

use tracing::{debug, warn};

use crate::address::MatrixAddress;
use crate::hal::{ControlLines, CrosspointSwitch, Delay, Line};

/// Strobe pulse width in microseconds
pub const STROBE_HOLD_US: u32 = 3;

/// Reset pulse width in microseconds
pub const RESET_PULSE_US: u32 = 3;

/// Number of AY pins, same on all models
const AY_PINS: u8 = 3;

/// Supported switch chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChipModel {
    /// 8x8 matrix
    #[default]
    Mt8808,
    /// 12x8 matrix
    Mt8812,
    /// 16x8 matrix
    Mt8816,
}

impl ChipModel {
    pub const ALL: &'static [ChipModel] = &[ChipModel::Mt8808, ChipModel::Mt8812, ChipModel::Mt8816];

    /// Number of X lines
    pub const fn x_lines(self) -> u8 {
        match self {
            ChipModel::Mt8808 => 8,
            ChipModel::Mt8812 => 12,
            ChipModel::Mt8816 => 16,
        }
    }

    /// Number of AX address pins
    pub const fn ax_pins(self) -> u8 {
        match self {
            ChipModel::Mt8808 => 3,
            ChipModel::Mt8812 | ChipModel::Mt8816 => 4,
        }
    }

    /// AX pin code selecting X line `x`, `None` if the chip has no such line
    pub const fn ax_code(self, x: u8) -> Option<u8> {
        match (self, x) {
            (ChipModel::Mt8808, 0..=7) => Some(x),
            (ChipModel::Mt8812 | ChipModel::Mt8816, 0..=5) => Some(x),
            (ChipModel::Mt8812 | ChipModel::Mt8816, 6..=11) => Some(x + 2),
            (ChipModel::Mt8816, 12 | 13) => Some(x - 6),
            (ChipModel::Mt8816, 14 | 15) => Some(x),
            _ => None,
        }
    }

    /// Model name as printed on the chip
    pub fn name(&self) -> &'static str {
        match self {
            ChipModel::Mt8808 => "MT8808",
            ChipModel::Mt8812 => "MT8812",
            ChipModel::Mt8816 => "MT8816",
        }
    }
}

/// Driver for one MT88xx chip
pub struct Mt88xx<L, D> {
    lines: L,
    delay: D,
    chip: ChipModel,
}

impl<L: ControlLines, D: Delay> Mt88xx<L, D> {
    /// Create a driver on top of the given control lines
    pub fn new(lines: L, delay: D, chip: ChipModel) -> Self {
        Self { lines, delay, chip }
    }

    pub fn chip(&self) -> ChipModel {
        self.chip
    }

    /// Access the control lines (e.g. to inspect a simulated chip)
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Take the driver apart again
    pub fn into_parts(self) -> (L, D) {
        (self.lines, self.delay)
    }

    fn set_address(&mut self, ax_code: u8, ay: u8) {
        for bit in 0..self.chip.ax_pins() {
            self.lines.set(Line::Ax(bit), ax_code & (1 << bit) != 0);
        }
        for bit in 0..AY_PINS {
            self.lines.set(Line::Ay(bit), ay & (1 << bit) != 0);
        }
    }

    fn strobe(&mut self) {
        self.lines.set(Line::Strobe, true);
        self.delay.delay_us(STROBE_HOLD_US);
        self.lines.set(Line::Strobe, false);
    }
}

impl<L: ControlLines, D: Delay> CrosspointSwitch for Mt88xx<L, D> {
    fn x_lines(&self) -> u8 {
        self.chip.x_lines()
    }

    fn reset(&mut self) {
        debug!("Resetting {}", self.chip.name());
        self.lines.set(Line::Reset, true);
        self.delay.delay_us(RESET_PULSE_US);
        self.lines.set(Line::Reset, false);
    }

    fn set_switch(&mut self, address: MatrixAddress, closed: bool) {
        let Some(ax_code) = self.chip.ax_code(address.ax()) else {
            warn!("{} has no X line for {}", self.chip.name(), address);
            return;
        };
        self.set_address(ax_code, address.ay());
        self.lines.set(Line::Data, closed);
        self.strobe();
    }
}
