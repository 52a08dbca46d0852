//! # AGMD Models
//!
//! Constitutive physics for air gap membrane distillation (AGMD)
//! desalination, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations that evaluate a
//!   complete AGMD node.
//! - [`support`]: The stateless transport correlations the models are built
//!   from, plus supporting utilities.
//!
//! The correlations in [`support::agmd`] are usable on their own by any
//! outer energy and mass balance solver. Thermophysical properties of brine
//! and moist air are supplied by the caller through the traits in
//! [`support::properties`].

pub mod models;
pub mod support;
