//! Transport correlations for air gap membrane distillation (AGMD).
//!
//! Each function evaluates one closure relation at a single point of an AGMD
//! module: one node of a discretized channel at one instant. None of them
//! validate their inputs, allocate, or hold state, so an outer solver can
//! call them at high frequency and from many threads.
//!
//! # Overview
//!
//! Hot brine flows through a spacer-filled [`Channel`] past a hydrophobic
//! [`Membrane`]. Water evaporates at the membrane, diffuses through its
//! pores and across a stagnant [`AirGap`], and condenses on a cold plate.
//!
//! - **Heat and salt transport in the channel**:
//!   [`channel_heat_transfer_coefficient`], [`channel_mass_transfer_coefficient`]
//! - **Heat conduction through the membrane**: [`membrane_conductivity`]
//! - **Vapor diffusion**: [`molecular_diffusion`], [`knudsen_diffusion`],
//!   [`effective_diffusion`], [`membrane_permeability`], [`gap_permeability`]
//! - **Water flux**: [`mass_flux`]
//! - **Concentration polarization**: [`wall_salinity`], [`wall_salinity_at`]
//!
//! Domain checks live apart from the correlations; see [`DomainError`] and
//! the `validate()` methods on the input types.
//!
//! # Example
//!
//! ```
//! use agmd_models::support::agmd::{AirGap, Membrane, VaporConditions, mass_flux};
//! use uom::si::{
//!     f64::{Length, Pressure, Ratio, ThermalConductivity, ThermodynamicTemperature},
//!     length::{micrometer, millimeter},
//!     mass_flux::kilogram_per_square_meter_second,
//!     pressure::{kilopascal, pascal},
//!     ratio::ratio,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let membrane = Membrane {
//!     porosity: Ratio::new::<ratio>(0.8),
//!     tortuosity: Ratio::new::<ratio>(1.5),
//!     thickness: Length::new::<micrometer>(100.0),
//!     pore_diameter: Length::new::<micrometer>(0.2),
//!     polymer_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.25),
//! };
//! let gap = AirGap {
//!     thickness: Length::new::<millimeter>(2.0),
//! };
//! let conditions = VaporConditions {
//!     membrane_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
//!     gap_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     feed_membrane_pressure: Pressure::new::<kilopascal>(19.946),
//!     film_boundary_pressure: Pressure::new::<kilopascal>(3.169),
//!     vacuum_pressure: Pressure::new::<pascal>(0.0),
//! };
//!
//! let flux = mass_flux(&membrane, &gap, &conditions);
//! let kg_per_m2_h = flux.get::<kilogram_per_square_meter_second>() * 3600.0;
//! assert!(kg_per_m2_h > 1.0 && kg_per_m2_h < 10.0);
//! ```

mod channel;
pub mod constants;
mod diffusion;
mod mass_flux;
mod membrane;
mod polarization;
mod validation;

pub use channel::{
    Channel, channel_heat_transfer_coefficient, channel_mass_transfer_coefficient,
    channel_reynolds,
};
pub use diffusion::{
    effective_diffusion, gap_permeability, knudsen_diffusion, mean_molecular_speed,
    membrane_permeability, molecular_diffusion, total_pressure,
};
pub use mass_flux::{VaporConditions, mass_flux, overall_permeability};
pub use membrane::{AirGap, Membrane, membrane_conductivity};
pub use polarization::{
    molarity, polarization_factor, salinity_from_molarity, wall_salinity, wall_salinity_at,
};
pub use validation::DomainError;

pub(crate) use validation::{check, check_temperature};
