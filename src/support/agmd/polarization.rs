use uom::si::{
    f64::{
        MassDensity, MassFlux, MolarConcentration, Ratio, SpecificVolume, ThermodynamicTemperature,
        Velocity,
    },
    ratio::ratio,
};

use crate::support::properties::{BrineModel, PropertyError};

use super::constants::{nacl_density, nacl_molar_mass};

/// Salt molarity of a sodium chloride solution with the given mass fraction.
///
/// Assumes ideal mixing: the solution volume is the sum of the water and salt
/// volumes at their pure-component densities.
#[must_use]
pub fn molarity(salinity: Ratio, water_density: MassDensity) -> MolarConcentration {
    let water = Ratio::new::<ratio>(1.0) - salinity;
    let specific_volume: SpecificVolume = water / water_density + salinity / nacl_density();

    (salinity / (nacl_molar_mass() * specific_volume)).into()
}

/// Salt mass fraction of a solution with the given molarity.
///
/// The inverse of [`molarity`] under the same mixing rule.
#[must_use]
pub fn salinity_from_molarity(molarity: MolarConcentration, water_density: MassDensity) -> Ratio {
    let salt: MassDensity = molarity * nacl_molar_mass();
    let crystal = nacl_density();

    salt * crystal / (water_density * crystal + salt * (crystal - water_density))
}

/// Film-theory enrichment of salt at the membrane wall, `exp(J / (ρ·k))`.
#[must_use]
pub fn polarization_factor(
    mass_flux: MassFlux,
    water_density: MassDensity,
    mass_transfer_coefficient: Velocity,
) -> Ratio {
    let exponent: Ratio = mass_flux / (water_density * mass_transfer_coefficient);
    Ratio::new::<ratio>(exponent.get::<ratio>().exp())
}

/// Salt mass fraction at the membrane wall under concentration polarization.
///
/// The bulk salinity is converted to molarity, enriched by
/// [`polarization_factor`], and converted back. At zero flux the wall
/// salinity equals the bulk salinity.
///
/// `water_density` is the pure-water density at the feed temperature; see
/// [`wall_salinity_at`] for the provider-aware form.
#[must_use]
pub fn wall_salinity(
    water_density: MassDensity,
    mass_transfer_coefficient: Velocity,
    salinity: Ratio,
    mass_flux: MassFlux,
) -> Ratio {
    let factor = polarization_factor(mass_flux, water_density, mass_transfer_coefficient);
    let wall = molarity(salinity, water_density) * factor.get::<ratio>();

    salinity_from_molarity(wall, water_density)
}

/// Salt mass fraction at the membrane wall, looking up water density from `brine`.
///
/// The density is evaluated at the feed temperature and zero salinity, as
/// the underlying correlation prescribes, even when the feed is saline.
///
/// # Errors
///
/// Returns [`PropertyError`] if the density lookup fails.
pub fn wall_salinity_at(
    brine: &impl BrineModel,
    temperature: ThermodynamicTemperature,
    mass_transfer_coefficient: Velocity,
    salinity: Ratio,
    mass_flux: MassFlux,
) -> Result<Ratio, PropertyError> {
    let water_density = brine.pure_water_density(temperature, Ratio::new::<ratio>(0.0))?;
    Ok(wall_salinity(
        water_density,
        mass_transfer_coefficient,
        salinity,
        mass_flux,
    ))
}
