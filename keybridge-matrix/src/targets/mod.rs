//! Built-in target layouts
//!
//! Each target module defines its key positions as address constants, its
//! combos and macros as statics, and exposes one [`TargetLayout`].

pub mod spectrum;
pub mod zx80;
pub mod zx8x;

pub use spectrum::SPECTRUM;
pub use zx80::ZX80;

use crate::layout::TargetLayout;

/// Every built-in target
pub static ALL: [&TargetLayout; 2] = [&SPECTRUM, &ZX80];

/// Find a built-in target by name (case insensitive)
pub fn by_name(name: &str) -> Option<&'static TargetLayout> {
    ALL.iter()
        .copied()
        .find(|layout| layout.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Spectrum").map(|l| l.name), Some("spectrum"));
        assert_eq!(by_name("zx80").map(|l| l.name), Some("zx80"));
        assert!(by_name("zx81").is_none());
    }
}
