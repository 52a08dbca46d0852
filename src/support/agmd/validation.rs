//! Domain checks run ahead of the unconditioned correlations.
//!
//! The correlations in this module tree accept any `f64` and let invalid
//! inputs surface as NaN or infinity. Callers that want a typed error
//! instead run `validate()` on the inputs first.

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalOpen},
    properties::{BrineProperties, MoistAirProperties},
};

use super::{AirGap, Channel, Membrane, VaporConditions, total_pressure};

/// A parameter violates the physical domain of the correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {parameter}")]
pub struct DomainError {
    /// Name of the offending parameter.
    pub parameter: &'static str,
    pub source: ConstraintError,
}

/// Checks `value` against constraint `C`, tagging failures with `parameter`.
pub(crate) fn check<C, T>(parameter: &'static str, value: &T) -> Result<(), DomainError>
where
    C: Constraint<T>,
{
    C::check(value).map_err(|source| DomainError { parameter, source })
}

pub(crate) fn check_temperature(
    parameter: &'static str,
    temperature: ThermodynamicTemperature,
) -> Result<(), DomainError> {
    check::<StrictlyPositive, _>(parameter, &temperature.get::<kelvin>())
}

impl Channel {
    /// Checks that every dimension is positive and the spacer porosity lies in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        check::<StrictlyPositive, _>("channel height", &self.height)?;
        check::<StrictlyPositive, _>("channel width", &self.width)?;
        check::<StrictlyPositive, _>("channel count", &self.count)?;
        check::<UnitIntervalOpen, _>("spacer porosity", &self.spacer_porosity)
    }
}

impl Membrane {
    /// Checks that the porosity lies in `(0, 1)` and every other parameter is positive.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        check::<UnitIntervalOpen, _>("membrane porosity", &self.porosity)?;
        check::<StrictlyPositive, _>("membrane tortuosity", &self.tortuosity)?;
        check::<StrictlyPositive, _>("membrane thickness", &self.thickness)?;
        check::<StrictlyPositive, _>("pore diameter", &self.pore_diameter)?;
        check::<StrictlyPositive, _>("polymer conductivity", &self.polymer_conductivity)
    }
}

impl AirGap {
    /// Checks that the gap has a positive thickness.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the thickness is not positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        check::<StrictlyPositive, _>("air gap thickness", &self.thickness)
    }
}

impl VaporConditions {
    /// Checks absolute temperatures, non-negative vapor pressures, and a
    /// positive total gas pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_temperature("membrane temperature", self.membrane_temperature)?;
        check_temperature("gap temperature", self.gap_temperature)?;
        check::<NonNegative, _>("feed membrane pressure", &self.feed_membrane_pressure)?;
        check::<NonNegative, _>("film boundary pressure", &self.film_boundary_pressure)?;
        check::<StrictlyPositive, _>("total gas pressure", &total_pressure(self.vacuum_pressure))
    }
}

impl BrineProperties {
    /// Checks that every property is positive.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the first invalid property.
    pub fn validate(&self) -> Result<(), DomainError> {
        check::<StrictlyPositive, _>("brine viscosity", &self.dynamic_viscosity)?;
        check::<StrictlyPositive, _>("brine conductivity", &self.thermal_conductivity)?;
        check::<StrictlyPositive, _>("brine Prandtl number", &self.prandtl)?;
        check::<StrictlyPositive, _>("brine mass diffusivity", &self.mass_diffusivity)?;
        check::<StrictlyPositive, _>("brine Schmidt number", &self.schmidt)
    }
}

impl MoistAirProperties {
    /// Checks that the conductivity is positive.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the conductivity is not positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        check::<StrictlyPositive, _>("pore air conductivity", &self.thermal_conductivity)
    }
}
