//! Shared fixtures for node model tests.

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, Length, MassDensity, MassRate, Pressure, Ratio,
        ThermalConductivity, ThermodynamicTemperature,
    },
    length::{micrometer, millimeter},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::kilopascal,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    agmd::{AirGap, Channel, Membrane},
    properties::{BrineModel, BrineProperties, MoistAirModel, MoistAirProperties, PropertyError},
};

use super::{MembraneModule, NodeInput};

/// Highest salinity the test brine accepts by default.
const SALINITY_LIMIT: f64 = 0.26;

/// Brine with fixed properties except for an optional Schmidt number slope.
///
/// The Schmidt number is `300 * (1 + slope * salinity)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestBrine {
    schmidt_slope: f64,
    salinity_limit: f64,
}

impl TestBrine {
    pub(crate) fn constant() -> Self {
        Self {
            schmidt_slope: 0.0,
            salinity_limit: SALINITY_LIMIT,
        }
    }

    pub(crate) fn salinity_dependent() -> Self {
        Self {
            schmidt_slope: 2.0,
            ..Self::constant()
        }
    }

    /// Accepts any salinity.
    pub(crate) fn unlimited(self) -> Self {
        Self {
            salinity_limit: f64::INFINITY,
            ..self
        }
    }

    pub(crate) fn properties_at(&self, salinity: Ratio) -> BrineProperties {
        BrineProperties {
            dynamic_viscosity: DynamicViscosity::new::<pascal_second>(5e-4),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.64),
            prandtl: Ratio::new::<ratio>(3.0),
            mass_diffusivity: DiffusionCoefficient::new::<square_meter_per_second>(1.5e-9),
            schmidt: Ratio::new::<ratio>(
                300.0 * (1.0 + self.schmidt_slope * salinity.get::<ratio>()),
            ),
        }
    }

    pub(crate) fn density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(983.2)
    }

    fn check(&self, salinity: Ratio) -> Result<(), PropertyError> {
        let limit = self.salinity_limit;
        if salinity.get::<ratio>() > limit {
            return Err(PropertyError::OutOfDomain {
                context: format!("salinity {} above {limit}", salinity.get::<ratio>()),
            });
        }
        Ok(())
    }
}

impl BrineModel for TestBrine {
    fn brine_properties(
        &self,
        _temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<BrineProperties, PropertyError> {
        self.check(salinity)?;
        Ok(self.properties_at(salinity))
    }

    fn pure_water_density(
        &self,
        _temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<MassDensity, PropertyError> {
        self.check(salinity)?;
        Ok(self.density())
    }
}

/// Moist air with a fixed conductivity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestAir;

impl TestAir {
    pub(crate) fn properties() -> MoistAirProperties {
        MoistAirProperties {
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.028),
        }
    }
}

impl MoistAirModel for TestAir {
    fn moist_air_properties(
        &self,
        _temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<MoistAirProperties, PropertyError> {
        Ok(Self::properties())
    }
}

/// Moist air provider that rejects every state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingAir;

impl MoistAirModel for FailingAir {
    fn moist_air_properties(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<MoistAirProperties, PropertyError> {
        Err(PropertyError::OutOfDomain {
            context: format!("{:.2} °C", temperature.get::<degree_celsius>()),
        })
    }
}

/// A flat-sheet PTFE module with a 2 mm air gap.
pub(crate) fn module() -> MembraneModule {
    MembraneModule {
        channel: Channel {
            height: Length::new::<millimeter>(2.0),
            width: Length::new::<millimeter>(500.0),
            count: 2,
            spacer_porosity: Ratio::new::<ratio>(0.8),
        },
        membrane: Membrane {
            porosity: Ratio::new::<ratio>(0.8),
            tortuosity: Ratio::new::<ratio>(1.5),
            thickness: Length::new::<micrometer>(100.0),
            pore_diameter: Length::new::<micrometer>(0.2),
            polymer_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.25),
        },
        air_gap: AirGap {
            thickness: Length::new::<millimeter>(2.0),
        },
    }
}

/// Seawater feed at 65 °C over a membrane at 60 °C and a gap at 25 °C.
pub(crate) fn input() -> NodeInput {
    NodeInput {
        feed_mass_rate: MassRate::new::<kilogram_per_second>(0.1),
        feed_temperature: ThermodynamicTemperature::new::<degree_celsius>(65.0),
        wall_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
        membrane_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
        gap_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        bulk_salinity: Ratio::new::<ratio>(0.035),
        feed_membrane_pressure: Pressure::new::<kilopascal>(19.946),
        film_boundary_pressure: Pressure::new::<kilopascal>(3.169),
        vacuum_pressure: Pressure::new::<kilopascal>(0.0),
    }
}
