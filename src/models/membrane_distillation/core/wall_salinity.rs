//! Self-consistent wall salinity.
//!
//! The wall-side Schmidt number depends on the wall salinity, and the wall
//! salinity depends on the mass-transfer coefficient built from it. The
//! coupling is resolved by bisection on `S_wall - polarize(S_wall)`.

mod config;
mod problem;

pub use config::WallSalinityConfig;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{f64::Ratio, ratio::ratio},
};

use crate::support::{agmd::DomainError, constraint::ConstraintError, properties::BrineModel};

use super::NodeError;

pub(super) use problem::{WallSalinityModel, WallState};

use problem::WallSalinityProblem;

/// Finds the wall salinity consistent with its own mass-transfer coefficient.
///
/// Without a positive flux or any salt in the bulk there is nothing to
/// polarize, and the wall state is evaluated at the bulk salinity.
///
/// # Errors
///
/// Returns [`NodeError`] if the bulk salinity is not below the search limit,
/// polarization would carry the wall past that limit, a property lookup fails
/// outside the solver, or the solve does not converge.
pub(super) fn resolve_wall_salinity<Brine: BrineModel>(
    model: &WallSalinityModel<'_, Brine>,
    config: &WallSalinityConfig,
) -> Result<WallState, NodeError> {
    let bulk_salinity = model.bulk_salinity;

    if model.mass_flux.value <= 0.0 || bulk_salinity <= Ratio::ZERO {
        return Ok(model.unpolarized()?);
    }

    let max_salinity = *config.max_salinity.as_ref();
    if bulk_salinity >= max_salinity {
        return Err(DomainError {
            parameter: "bulk salinity",
            source: ConstraintError::AboveMaximum,
        }
        .into());
    }

    // The residual is negative at the bulk salinity. It must turn positive
    // by the upper end of the bracket, unless the provider cannot evaluate there.
    let exceeds_limit = model
        .call(&max_salinity)
        .is_ok_and(|upper| upper.polarized > upper.salinity);
    if exceeds_limit {
        return Err(DomainError {
            parameter: "wall salinity",
            source: ConstraintError::AboveMaximum,
        }
        .into());
    }

    let solution = bisection::solve(
        model,
        &WallSalinityProblem,
        [bulk_salinity.get::<ratio>(), max_salinity.get::<ratio>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed lookup means the candidate is past the provider's
            // salinity range, so the root lies below it.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(NodeError::MaxIters {
            residual: Ratio::new::<ratio>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}
