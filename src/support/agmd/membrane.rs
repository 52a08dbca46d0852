use uom::si::{
    f64::{Length, Ratio, ThermalConductivity},
    ratio::ratio,
};

use crate::support::properties::MoistAirProperties;

/// Empirical correction for the tortuous pore geometry of real membranes.
const TORTUOUS_PORE_CORRECTION: f64 = 0.93;

/// Porous hydrophobic membrane between the feed channel and the air gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Membrane {
    /// Void fraction of the membrane, in `(0, 1)`.
    pub porosity: Ratio,
    pub tortuosity: Ratio,
    pub thickness: Length,
    pub pore_diameter: Length,
    /// Thermal conductivity of the solid polymer matrix.
    pub polymer_conductivity: ThermalConductivity,
}

impl Membrane {
    /// Effective thermal conductivity with the given pore air.
    ///
    /// See [`membrane_conductivity`].
    #[must_use]
    pub fn conductivity(&self, pore_air: &MoistAirProperties) -> ThermalConductivity {
        membrane_conductivity(pore_air, self.polymer_conductivity, self.porosity)
    }
}

/// Stagnant air layer between the membrane and the condensing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirGap {
    pub thickness: Length,
}

/// Effective thermal conductivity of a porous membrane.
///
/// Applies Maxwell's mixing rule for a continuous polymer matrix holding
/// spherical air inclusions, scaled by an empirical factor of 0.93:
///
/// ```text
/// β     = (k_p − k_a) / (k_p + 2·k_a)
/// k_eff = 0.93 · k_a · (1 + 2β(1 − ε)) / (1 − β(1 − ε))
/// ```
///
/// The factor is always applied, so a fully porous membrane (`ε = 1`)
/// conducts `0.93·k_a` rather than `k_a`.
///
/// Reference: I. Hitsov et al., Full-scale validated Air Gap Membrane
/// Distillation (AGMD) model without calibration parameters,
/// J. Membrane Sci. 533 (2017) 309-320.
#[must_use]
pub fn membrane_conductivity(
    pore_air: &MoistAirProperties,
    polymer_conductivity: ThermalConductivity,
    porosity: Ratio,
) -> ThermalConductivity {
    let k_air = pore_air.thermal_conductivity;
    let beta: Ratio = (polymer_conductivity - k_air) / (polymer_conductivity + k_air * 2.0);
    let solid = beta.get::<ratio>() * (1.0 - porosity.get::<ratio>());

    k_air * (TORTUOUS_PORE_CORRECTION * (1.0 + 2.0 * solid) / (1.0 - solid))
}
