use uom::si::{
    f64::{HeatTransfer, Length, MassFlux, MassRate, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::properties::BrineProperties;

/// Spacer-filled flow channel on the feed side of the membrane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub height: Length,
    pub width: Length,
    /// Number of parallel channels sharing the total mass flow.
    pub count: u32,
    /// Void fraction left by the spacer mesh, in `(0, 1)`.
    pub spacer_porosity: Ratio,
}

/// Reynolds number of the flow through the spacer-filled channel.
///
/// The mass velocity is referred to the open cross section,
/// `G = ṁ / (N·h·w·ε)`, and the channel height is the length scale.
#[must_use]
pub fn channel_reynolds(bulk: &BrineProperties, mass_rate: MassRate, channel: &Channel) -> Ratio {
    let open_fraction = f64::from(channel.count) * channel.spacer_porosity.get::<ratio>();
    let mass_velocity: MassFlux = mass_rate / (channel.height * channel.width * open_fraction);

    mass_velocity * channel.height / bulk.dynamic_viscosity
}

/// Convective heat-transfer coefficient between bulk brine and the membrane.
///
/// Uses the spacer-filled channel correlation
/// `Nu = 0.22 · Re^0.69 · Pr^0.13 · (Pr/Pr_w)^0.25` with `h = k·Nu/H`.
///
/// # Known limitation
///
/// The correlation was fitted over a limited Reynolds range. Values outside
/// that range are extrapolated without clamping or warning.
#[must_use]
pub fn channel_heat_transfer_coefficient(
    bulk: &BrineProperties,
    wall: &BrineProperties,
    mass_rate: MassRate,
    channel: &Channel,
) -> HeatTransfer {
    let reynolds = channel_reynolds(bulk, mass_rate, channel);
    let nusselt = spacer_correlation(reynolds, bulk.prandtl, wall.prandtl);

    bulk.thermal_conductivity * nusselt / channel.height
}

/// Convective mass-transfer coefficient of salt between bulk and membrane wall.
///
/// The mass-transfer analogue of [`channel_heat_transfer_coefficient`]:
/// `Sh = 0.22 · Re^0.69 · Sc^0.13 · (Sc/Sc_w)^0.25` with `k = D·Sh/H`.
/// Carries the same extrapolation caveat.
#[must_use]
pub fn channel_mass_transfer_coefficient(
    bulk: &BrineProperties,
    wall: &BrineProperties,
    mass_rate: MassRate,
    channel: &Channel,
) -> Velocity {
    let reynolds = channel_reynolds(bulk, mass_rate, channel);
    let sherwood = spacer_correlation(reynolds, bulk.schmidt, wall.schmidt);

    bulk.mass_diffusivity * sherwood / channel.height
}

/// Nusselt or Sherwood number for a spacer-filled channel.
///
/// `bulk` and `wall` are the Prandtl (heat) or Schmidt (mass) numbers.
#[inline]
fn spacer_correlation(reynolds: Ratio, bulk: Ratio, wall: Ratio) -> f64 {
    let re = reynolds.get::<ratio>();
    let bulk = bulk.get::<ratio>();
    let wall = wall.get::<ratio>();

    0.22 * re.powf(0.69) * bulk.powf(0.13) * (bulk / wall).powf(0.25)
}
