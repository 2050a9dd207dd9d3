//! Crosspoint addresses
//!
//! A matrix address is a 7 bit value:
//!
//! ```text
//!     bit | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//!         | - |    AY     |      AX       |
//! ```
//!
//! AX names an X line and AY a Y line of the switch matrix, i.e. one
//! row/column intersection of the target's keyboard. AX holds the *logical*
//! X line; [`crate::mt88xx::ChipModel`] converts it to the chip's AX pin code
//! when the crosspoint is driven, so target tables don't depend on the chip.

use core::fmt;

use crate::error::AddressError;

/// Mask for the AX bits of a raw address
pub const AX_MASK: u8 = 0b0000_1111;

/// Mask for the AY bits of a raw address
pub const AY_MASK: u8 = 0b0111_0000;

/// Shift of the AY field within a raw address
pub const AY_SHIFT: u8 = 4;

/// Bit 7 is never part of an address
const TAG_BIT: u8 = 0b1000_0000;

/// Largest number of X lines any supported chip has (MT8816)
pub const MAX_X_LINES: u8 = 16;

/// Number of Y lines on every supported chip
pub const MAX_Y_LINES: u8 = 8;

/// Address of a single crosspoint in the switch matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixAddress(u8);

impl MatrixAddress {
    /// Crosspoint at X line `x` and Y line `y`.
    ///
    /// Intended for table definitions; panics when `x > 15` or `y > 7`,
    /// which turns into a compile error in `const`/`static` items.
    pub const fn at(x: u8, y: u8) -> Self {
        assert!(
            x < MAX_X_LINES && y < MAX_Y_LINES,
            "crosspoint out of range"
        );
        Self(x | (y << AY_SHIFT))
    }

    /// Crosspoint from its AX/AY components, `None` if either is out of range
    pub const fn from_parts(ax: u8, ay: u8) -> Option<Self> {
        if ax < MAX_X_LINES && ay < MAX_Y_LINES {
            Some(Self(ax | (ay << AY_SHIFT)))
        } else {
            None
        }
    }

    /// Crosspoint from a raw 7 bit value, `None` when bit 7 is set
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw & TAG_BIT == 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw 7 bit value
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// X line (AX field)
    pub const fn ax(self) -> u8 {
        self.0 & AX_MASK
    }

    /// Y line (AY field)
    pub const fn ay(self) -> u8 {
        (self.0 & AY_MASK) >> AY_SHIFT
    }
}

impl TryFrom<u8> for MatrixAddress {
    type Error = AddressError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(AddressError::TagBitSet(raw))
    }
}

impl From<MatrixAddress> for u8 {
    fn from(address: MatrixAddress) -> Self {
        address.raw()
    }
}

impl fmt::Display for MatrixAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}/Y{}", self.ax(), self.ay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_into_ax_ay() {
        // 0b100_0111: AY=4, AX=7 (Spectrum "B" on an MT8808)
        let a = MatrixAddress::from_raw(0b100_0111).unwrap();
        assert_eq!(a.ax(), 7);
        assert_eq!(a.ay(), 4);
        assert_eq!(a, MatrixAddress::at(7, 4));
    }

    #[test]
    fn test_tag_bit_rejected() {
        assert_eq!(MatrixAddress::from_raw(0x80), None);
        assert_eq!(
            MatrixAddress::try_from(0xFF),
            Err(AddressError::TagBitSet(0xFF))
        );
        assert_eq!(MatrixAddress::try_from(0x7F).map(u8::from), Ok(0x7F));
    }

    #[test]
    fn test_from_parts_bounds() {
        assert_eq!(MatrixAddress::from_parts(15, 7).map(|a| a.raw()), Some(0x7F));
        assert_eq!(MatrixAddress::from_parts(16, 0), None);
        assert_eq!(MatrixAddress::from_parts(0, 8), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixAddress::at(3, 2).to_string(), "X3/Y2");
    }
}
