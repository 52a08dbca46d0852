use uom::si::f64::{MassFlux, Pressure, ThermodynamicTemperature};

use crate::support::units::VaporPermeability;

use super::{AirGap, Membrane, gap_permeability, membrane_permeability};

/// Local conditions driving vapor across the membrane and the air gap.
///
/// Temperatures may be constructed in any unit; every diffusion formula reads
/// them in kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporConditions {
    /// Mean temperature of the membrane.
    pub membrane_temperature: ThermodynamicTemperature,
    /// Mean temperature of the air gap.
    pub gap_temperature: ThermodynamicTemperature,
    /// Vapor pressure at the feed side of the membrane.
    pub feed_membrane_pressure: Pressure,
    /// Vapor pressure at the condensate film boundary.
    pub film_boundary_pressure: Pressure,
    /// Gauge pressure applied to the gap, added to atmospheric pressure.
    pub vacuum_pressure: Pressure,
}

/// Combines the membrane and air-gap permeabilities as resistances in series.
#[must_use]
pub fn overall_permeability(
    membrane: VaporPermeability,
    gap: VaporPermeability,
) -> VaporPermeability {
    membrane * gap / (membrane + gap)
}

/// Trans-membrane water mass flux.
///
/// `J = k · (p_feed − p_film)` where `k` is the series combination of the
/// membrane and air-gap permeabilities. The flux is linear in the vapor
/// pressure difference and vanishes when the two pressures are equal.
#[must_use]
pub fn mass_flux(membrane: &Membrane, gap: &AirGap, conditions: &VaporConditions) -> MassFlux {
    let k_membrane = membrane_permeability(
        membrane,
        conditions.membrane_temperature,
        conditions.vacuum_pressure,
    );
    let k_gap = gap_permeability(gap, conditions.gap_temperature, conditions.vacuum_pressure);

    overall_permeability(k_membrane, k_gap)
        * (conditions.feed_membrane_pressure - conditions.film_boundary_pressure)
}
