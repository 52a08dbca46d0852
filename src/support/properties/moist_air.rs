use uom::si::f64::{Pressure, ThermalConductivity, ThermodynamicTemperature};

use super::PropertyError;

/// Properties of the humid air filling the membrane pores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirProperties {
    pub thermal_conductivity: ThermalConductivity,
}

/// Capability for evaluating moist air properties.
pub trait MoistAirModel {
    /// Returns the properties of moist air at the given temperature and total
    /// pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the properties cannot be evaluated.
    fn moist_air_properties(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MoistAirProperties, PropertyError>;
}
