use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Ratio;

use crate::support::{agmd::DomainError, properties::PropertyError};

/// Errors that can occur while evaluating an AGMD node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The module or node input lies outside the physical domain.
    #[error("invalid node input")]
    Domain(#[from] DomainError),

    /// A property provider failed.
    #[error("property evaluation failed")]
    Property(#[from] PropertyError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The wall salinity solve reached the iteration limit without converging.
    #[error("wall salinity solve hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best wall salinity residual achieved.
        residual: Ratio,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
