//! Thermophysical property snapshots and the provider traits that supply them.
//!
//! Property evaluation for brine and moist air is not part of this crate.
//! Correlations consume immutable snapshots ([`BrineProperties`],
//! [`MoistAirProperties`]) and outer code obtains them from any type
//! implementing [`BrineModel`] or [`MoistAirModel`].
//!
//! Providers take `&self`, so a single provider can serve many evaluation
//! points concurrently as long as the implementation itself is `Sync`.

mod brine;
mod error;
mod moist_air;

pub use brine::{BrineModel, BrineProperties};
pub use error::PropertyError;
pub use moist_air::{MoistAirModel, MoistAirProperties};
