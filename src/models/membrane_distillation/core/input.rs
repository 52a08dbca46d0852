use uom::si::f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::{
    agmd::{AirGap, Channel, DomainError, Membrane, VaporConditions, check, check_temperature},
    constraint::{StrictlyPositive, UnitIntervalUpperOpen},
};

/// Geometry and materials of an AGMD module.
///
/// Fixed for a given module; shared by every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneModule {
    pub channel: Channel,
    pub membrane: Membrane,
    pub air_gap: AirGap,
}

impl MembraneModule {
    /// Checks the channel, membrane, and air gap.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.channel.validate()?;
        self.membrane.validate()?;
        self.air_gap.validate()
    }
}

/// Local state at one node and timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInput {
    /// Total feed mass flow, shared among the module's channels.
    pub feed_mass_rate: MassRate,
    /// Bulk temperature of the feed brine.
    pub feed_temperature: ThermodynamicTemperature,
    /// Feed temperature at the membrane wall.
    pub wall_temperature: ThermodynamicTemperature,
    /// Mean membrane temperature.
    pub membrane_temperature: ThermodynamicTemperature,
    /// Mean air gap temperature.
    pub gap_temperature: ThermodynamicTemperature,
    /// Bulk salt mass fraction of the feed.
    pub bulk_salinity: Ratio,
    pub feed_membrane_pressure: Pressure,
    pub film_boundary_pressure: Pressure,
    /// Gauge pressure applied to the gap.
    pub vacuum_pressure: Pressure,
}

impl NodeInput {
    /// The subset of the input that drives vapor transport.
    #[must_use]
    pub fn vapor_conditions(&self) -> VaporConditions {
        VaporConditions {
            membrane_temperature: self.membrane_temperature,
            gap_temperature: self.gap_temperature,
            feed_membrane_pressure: self.feed_membrane_pressure,
            film_boundary_pressure: self.film_boundary_pressure,
            vacuum_pressure: self.vacuum_pressure,
        }
    }

    pub(super) fn validate(&self) -> Result<(), DomainError> {
        check::<StrictlyPositive, _>("feed mass rate", &self.feed_mass_rate)?;
        check_temperature("feed temperature", self.feed_temperature)?;
        check_temperature("wall temperature", self.wall_temperature)?;
        check::<UnitIntervalUpperOpen, _>("bulk salinity", &self.bulk_salinity)?;
        self.vapor_conditions().validate()
    }
}
