mod open;
mod upper_open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use open::UnitIntervalOpen;
pub use upper_open::UnitIntervalUpperOpen;

/// Supplies 0 and 1 for types bounded by the unit interval.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`, the two representations
/// used for porosities and salinities in this crate.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
