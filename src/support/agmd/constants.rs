//! Physical constants shared by the transport correlations.
//!
//! Raw `f64` values are in SI base units. The typed accessors wrap the same
//! values in [`uom`] quantities for dimensional arithmetic.

use uom::si::{
    f64::{MassDensity, MolarHeatCapacity, MolarMass, Pressure},
    mass_density::kilogram_per_cubic_meter,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
};

/// Universal gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Molar mass of water, kg/mol.
pub const WATER_MOLAR_MASS: f64 = 18.015e-3;

/// Standard atmospheric pressure, Pa.
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Density of solid sodium chloride, kg/m³.
pub const NACL_DENSITY: f64 = 2160.0;

/// Molar mass of sodium chloride, kg/mol.
pub const NACL_MOLAR_MASS: f64 = 58.44e-3;

#[must_use]
pub fn gas_constant() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(GAS_CONSTANT)
}

#[must_use]
pub fn water_molar_mass() -> MolarMass {
    MolarMass::new::<kilogram_per_mole>(WATER_MOLAR_MASS)
}

#[must_use]
pub fn atmospheric_pressure() -> Pressure {
    Pressure::new::<pascal>(ATMOSPHERIC_PRESSURE)
}

#[must_use]
pub fn nacl_density() -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(NACL_DENSITY)
}

#[must_use]
pub fn nacl_molar_mass() -> MolarMass {
    MolarMass::new::<kilogram_per_mole>(NACL_MOLAR_MASS)
}
