use uom::si::f64::{HeatTransfer, MassFlux, Ratio, ThermalConductivity, Velocity};

use crate::support::units::VaporPermeability;

/// Transport coefficients and fluxes at one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeResults {
    /// Channel Reynolds number of the bulk feed.
    pub reynolds: Ratio,
    /// Feed-side convective heat-transfer coefficient.
    pub heat_transfer_coefficient: HeatTransfer,
    /// Feed-side salt mass-transfer coefficient at the resolved wall salinity.
    pub mass_transfer_coefficient: Velocity,
    /// Effective thermal conductivity of the membrane.
    pub membrane_conductivity: ThermalConductivity,
    pub membrane_permeability: VaporPermeability,
    pub gap_permeability: VaporPermeability,
    /// Water mass flux through the membrane.
    pub mass_flux: MassFlux,
    /// Salt mass fraction at the feed-side membrane wall.
    pub wall_salinity: Ratio,
}
