//! Single-node evaluation of an AGMD module.
//!
//! Evaluation follows the data dependencies between the correlations:
//! properties, then membrane conductivity and permeabilities, then the water
//! flux, and finally the wall salinity together with the channel transfer
//! coefficients that depend on it.

mod error;
mod input;
mod results;
mod wall_salinity;

#[cfg(test)]
pub(super) mod test_support;

pub use error::NodeError;
pub use input::{MembraneModule, NodeInput};
pub use results::NodeResults;
pub use wall_salinity::WallSalinityConfig;

use uom::{ConstZero, si::f64::Ratio};

use crate::support::{
    agmd::{
        channel_heat_transfer_coefficient, channel_reynolds, gap_permeability, mass_flux,
        membrane_permeability, total_pressure,
    },
    properties::{BrineModel, MoistAirModel},
};

use wall_salinity::{WallSalinityModel, resolve_wall_salinity};

/// Evaluates all transport correlations at one node.
///
/// # Errors
///
/// Returns a [`NodeError`] if the module or input is outside the physical
/// domain, a property provider fails, or the wall salinity does not converge.
pub(super) fn evaluate<Brine, Air>(
    module: &MembraneModule,
    config: &WallSalinityConfig,
    brine: &Brine,
    air: &Air,
    input: &NodeInput,
) -> Result<NodeResults, NodeError>
where
    Brine: BrineModel,
    Air: MoistAirModel,
{
    module.validate()?;
    input.validate()?;

    let bulk = brine.brine_properties(input.feed_temperature, input.bulk_salinity)?;
    bulk.validate()?;

    let pore_air = air.moist_air_properties(
        input.membrane_temperature,
        total_pressure(input.vacuum_pressure),
    )?;
    pore_air.validate()?;

    let membrane_conductivity = module.membrane.conductivity(&pore_air);
    let membrane_permeability = membrane_permeability(
        &module.membrane,
        input.membrane_temperature,
        input.vacuum_pressure,
    );
    let gap_permeability = gap_permeability(
        &module.air_gap,
        input.gap_temperature,
        input.vacuum_pressure,
    );
    let mass_flux = mass_flux(&module.membrane, &module.air_gap, &input.vapor_conditions());

    let water_density = brine.pure_water_density(input.feed_temperature, Ratio::ZERO)?;
    let wall = resolve_wall_salinity(
        &WallSalinityModel {
            brine,
            bulk,
            channel: &module.channel,
            mass_rate: input.feed_mass_rate,
            wall_temperature: input.wall_temperature,
            bulk_salinity: input.bulk_salinity,
            water_density,
            mass_flux,
        },
        config,
    )?;

    Ok(NodeResults {
        reynolds: channel_reynolds(&bulk, input.feed_mass_rate, &module.channel),
        heat_transfer_coefficient: channel_heat_transfer_coefficient(
            &bulk,
            &wall.properties,
            input.feed_mass_rate,
            &module.channel,
        ),
        mass_transfer_coefficient: wall.mass_transfer_coefficient,
        membrane_conductivity,
        membrane_permeability,
        gap_permeability,
        mass_flux,
        wall_salinity: wall.salinity,
    })
}
