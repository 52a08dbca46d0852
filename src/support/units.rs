//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. Vapor transport through
//! porous media deals in two quantities that [`uom`] ships under other
//! names; they are aliased here with their transport meaning:
//!
//! ```
//! use agmd_models::support::units::VaporPermeability;
//! use uom::si::f64::{MassFlux, Pressure};
//!
//! fn flux(permeability: VaporPermeability, driving_force: Pressure) -> MassFlux {
//!     permeability * driving_force
//! }
//! ```

mod quantities;

pub use quantities::{PressureDiffusivity, VaporPermeability};
