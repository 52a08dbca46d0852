use uom::si::f64::{InverseVelocity, LinearPowerDensity};

/// Product of total gas pressure and binary diffusion coefficient, Pa·m²/s.
///
/// For an ideal gas this product depends on temperature only. Pa·m²/s has
/// the dimension of W/m, so values are built with
/// `uom::si::linear_power_density` units.
pub type PressureDiffusivity = LinearPowerDensity;

/// Mass flux per unit vapor pressure difference, kg/(m²·s·Pa).
///
/// Dimensionally an inverse velocity; build values with
/// `uom::si::inverse_velocity::second_per_meter`.
pub type VaporPermeability = InverseVelocity;
