//! Matrix state
//!
//! One bit per crosspoint, mirroring what was last latched into the switch
//! chip. Toggle logic reads it to know which way to flip.

use core::fmt;

use crate::address::{MatrixAddress, MAX_X_LINES, MAX_Y_LINES};

/// On/off state of every crosspoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixState {
    /// One byte per X line, bit n = Y line n; 1 = closed
    rows: [u8; MAX_X_LINES as usize],
    x_lines: u8,
}

impl MatrixState {
    /// All-open state for a chip with `x_lines` X lines (capped at 16)
    pub const fn new(x_lines: u8) -> Self {
        let x_lines = if x_lines > MAX_X_LINES {
            MAX_X_LINES
        } else {
            x_lines
        };
        Self {
            rows: [0; MAX_X_LINES as usize],
            x_lines,
        }
    }

    pub fn x_lines(&self) -> u8 {
        self.x_lines
    }

    /// Check a crosspoint position against this matrix
    pub fn is_valid(&self, ax: u8, ay: u8) -> bool {
        ax < self.x_lines && ay < MAX_Y_LINES
    }

    /// State of a crosspoint; `false` for positions outside the matrix
    pub fn get(&self, ax: u8, ay: u8) -> bool {
        self.is_valid(ax, ay) && self.rows[usize::from(ax)] & (1 << ay) != 0
    }

    /// Record a crosspoint's state. Returns `false` (and changes nothing)
    /// for positions outside the matrix.
    pub fn set(&mut self, ax: u8, ay: u8, closed: bool) -> bool {
        if !self.is_valid(ax, ay) {
            return false;
        }
        let row = &mut self.rows[usize::from(ax)];
        if closed {
            *row |= 1 << ay;
        } else {
            *row &= !(1 << ay);
        }
        true
    }

    pub fn is_closed(&self, address: MatrixAddress) -> bool {
        self.get(address.ax(), address.ay())
    }

    /// Open every crosspoint
    pub fn clear(&mut self) {
        self.rows = [0; MAX_X_LINES as usize];
    }

    pub fn is_all_open(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Closed crosspoints, ordered by X line then Y line
    pub fn closed(&self) -> impl Iterator<Item = MatrixAddress> + '_ {
        (0..self.x_lines).flat_map(move |ax| {
            (0..MAX_Y_LINES).filter_map(move |ay| {
                if self.get(ax, ay) {
                    MatrixAddress::from_parts(ax, ay)
                } else {
                    None
                }
            })
        })
    }
}

/// Grid with one column per X line and one row per Y line, `#` = closed
impl fmt::Display for MatrixState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for ax in 0..self.x_lines {
            write!(f, " X{ax:<2}")?;
        }
        writeln!(f)?;
        for ay in 0..MAX_Y_LINES {
            write!(f, "Y{ay} ")?;
            for ax in 0..self.x_lines {
                let mark = if self.get(ax, ay) { '#' } else { '.' };
                write!(f, "  {mark} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut state = MatrixState::new(8);
        assert!(state.set(3, 5, true));
        assert!(state.get(3, 5));
        assert!(!state.get(5, 3));
        assert!(state.set(3, 5, false));
        assert!(state.is_all_open());
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut state = MatrixState::new(8);
        assert!(!state.set(8, 0, true));
        assert!(!state.set(0, 8, true));
        assert!(state.is_all_open());
        assert!(!state.get(8, 0));
    }

    #[test]
    fn test_x_lines_capped() {
        assert_eq!(MatrixState::new(40).x_lines(), 16);
        assert!(MatrixState::new(16).is_valid(15, 7));
    }

    #[test]
    fn test_closed_iter_and_clear() {
        let mut state = MatrixState::new(12);
        state.set(11, 7, true);
        state.set(0, 1, true);
        let closed: Vec<_> = state.closed().collect();
        assert_eq!(
            closed,
            vec![MatrixAddress::at(0, 1), MatrixAddress::at(11, 7)]
        );
        state.clear();
        assert_eq!(state.closed().count(), 0);
    }

    #[test]
    fn test_display_grid() {
        let mut state = MatrixState::new(2);
        state.set(1, 0, true);
        let grid = state.to_string();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    X0  X1 ");
        assert_eq!(lines[1], "Y0   .   # ");
    }
}
