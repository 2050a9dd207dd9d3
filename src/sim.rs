//! Simulated switch hardware
//!
//! [`SimulatedChip`] behaves like an MT88xx on the other end of the control
//! lines: it latches DATA into the addressed crosspoint on the strobe and
//! opens everything on reset. Every line change is traced, so a replay
//! with `RUST_LOG=trace` shows the exact pin sequence the firmware would
//! produce. [`VirtualDelay`] only accumulates time.

use keybridge_matrix::{ChipModel, ControlLines, Delay, Line, MatrixState};
use tracing::trace;

/// Software model of an MT88xx chip
#[derive(Debug, Clone)]
pub struct SimulatedChip {
    chip: ChipModel,
    ax: u8,
    ay: u8,
    data: bool,
    strobe: bool,
    /// Crosspoints by physical AX code, bit n = Y line n
    points: [u8; 16],
}

impl SimulatedChip {
    pub fn new(chip: ChipModel) -> Self {
        Self {
            chip,
            ax: 0,
            ay: 0,
            data: false,
            strobe: false,
            points: [0; 16],
        }
    }

    pub fn chip(&self) -> ChipModel {
        self.chip
    }

    /// Crosspoint state by physical AX pin code
    pub fn is_closed_raw(&self, ax_code: u8, ay: u8) -> bool {
        ax_code < 16 && ay < 8 && self.points[usize::from(ax_code)] & (1 << ay) != 0
    }

    /// Crosspoint states translated back to logical X lines
    pub fn logical_state(&self) -> MatrixState {
        let mut state = MatrixState::new(self.chip.x_lines());
        for x in 0..self.chip.x_lines() {
            let Some(code) = self.chip.ax_code(x) else {
                continue;
            };
            for y in 0..8 {
                state.set(x, y, self.is_closed_raw(code, y));
            }
        }
        state
    }

    fn latch(&mut self) {
        let row = &mut self.points[usize::from(self.ax & 0x0F)];
        if self.data {
            *row |= 1 << self.ay;
        } else {
            *row &= !(1 << self.ay);
        }
        trace!("Latched AX {} AY {} = {}", self.ax, self.ay, self.data);
    }
}

impl ControlLines for SimulatedChip {
    fn set(&mut self, line: Line, high: bool) {
        trace!("{:?} -> {}", line, u8::from(high));
        match line {
            Line::Ax(bit) => set_bit(&mut self.ax, bit, high),
            Line::Ay(bit) => set_bit(&mut self.ay, bit, high),
            Line::Data => self.data = high,
            Line::Strobe => {
                if high && !self.strobe {
                    self.latch();
                }
                self.strobe = high;
            }
            Line::Reset => {
                if high {
                    self.points = [0; 16];
                }
            }
        }
    }
}

fn set_bit(value: &mut u8, bit: u8, high: bool) {
    if high {
        *value |= 1 << bit;
    } else {
        *value &= !(1 << bit);
    }
}

/// Delay that doesn't wait, it only keeps count
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualDelay {
    elapsed_us: u64,
}

impl VirtualDelay {
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_us / 1000
    }
}

impl Delay for VirtualDelay {
    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += u64::from(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        trace!("Waiting {} ms", ms);
        self.elapsed_us += u64::from(ms) * 1000;
    }
}
