use uom::si::f64::{
    DiffusionCoefficient, DynamicViscosity, MassDensity, Ratio, ThermalConductivity,
    ThermodynamicTemperature,
};

use super::PropertyError;

/// Brine transport properties at one temperature and salinity.
///
/// A snapshot is read-only for the duration of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrineProperties {
    pub dynamic_viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub prandtl: Ratio,
    /// Diffusion coefficient of salt in water.
    pub mass_diffusivity: DiffusionCoefficient,
    pub schmidt: Ratio,
}

/// Capability for evaluating brine properties.
pub trait BrineModel {
    /// Returns the transport properties of brine at the given temperature and
    /// salt mass fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the properties cannot be evaluated.
    fn brine_properties(
        &self,
        temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<BrineProperties, PropertyError>;

    /// Returns the density of salt water at the given temperature and salt
    /// mass fraction.
    ///
    /// Concentration polarization calls this with zero salinity.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be evaluated.
    fn pure_water_density(
        &self,
        temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<MassDensity, PropertyError>;
}
