//! Problem formulation for the wall salinity fixed point.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{MassDensity, MassFlux, MassRate, Ratio, ThermodynamicTemperature, Velocity},
    ratio::ratio,
};

use crate::support::{
    agmd::{Channel, channel_mass_transfer_coefficient, wall_salinity},
    properties::{BrineModel, BrineProperties, PropertyError},
};

/// Feed-side state at the membrane wall for one candidate salinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallState {
    /// Candidate wall salinity.
    pub(crate) salinity: Ratio,
    /// Wall salinity implied by polarizing the bulk with this state's coefficient.
    pub(crate) polarized: Ratio,
    pub(crate) properties: BrineProperties,
    pub(crate) mass_transfer_coefficient: Velocity,
}

/// Model adapter exposing the wall salinity as the sole input.
pub(crate) struct WallSalinityModel<'a, Brine> {
    pub(crate) brine: &'a Brine,
    pub(crate) bulk: BrineProperties,
    pub(crate) channel: &'a Channel,
    pub(crate) mass_rate: MassRate,
    pub(crate) wall_temperature: ThermodynamicTemperature,
    pub(crate) bulk_salinity: Ratio,
    pub(crate) water_density: MassDensity,
    pub(crate) mass_flux: MassFlux,
}

impl<Brine: BrineModel> WallSalinityModel<'_, Brine> {
    /// The wall state when nothing polarizes the feed.
    pub(super) fn unpolarized(&self) -> Result<WallState, PropertyError> {
        let state = self.call(&self.bulk_salinity)?;
        Ok(WallState {
            polarized: self.bulk_salinity,
            ..state
        })
    }
}

impl<Brine: BrineModel> Model for WallSalinityModel<'_, Brine> {
    type Input = Ratio;
    type Output = WallState;
    type Error = PropertyError;

    fn call(&self, salinity: &Self::Input) -> Result<Self::Output, Self::Error> {
        let properties = self.brine.brine_properties(self.wall_temperature, *salinity)?;
        let mass_transfer_coefficient = channel_mass_transfer_coefficient(
            &self.bulk,
            &properties,
            self.mass_rate,
            self.channel,
        );
        let polarized = wall_salinity(
            self.water_density,
            mass_transfer_coefficient,
            self.bulk_salinity,
            self.mass_flux,
        );

        Ok(WallState {
            salinity: *salinity,
            polarized,
            properties,
            mass_transfer_coefficient,
        })
    }
}

/// Equation problem whose residual is `salinity - polarized`.
pub(super) struct WallSalinityProblem;

impl EquationProblem<1> for WallSalinityProblem {
    type Input = Ratio;
    type Output = WallState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Ratio::new::<ratio>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(*input - output.polarized).get::<ratio>()])
    }
}
