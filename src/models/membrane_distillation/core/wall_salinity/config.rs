use twine_solvers::equation::bisection;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, UnitIntervalOpen};

/// Solver configuration for the wall salinity fixed point.
#[derive(Debug, Clone, Copy)]
pub struct WallSalinityConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the wall salinity search variable.
    pub salinity_tol: Ratio,

    /// Absolute tolerance on the residual `S_wall - polarize(S_wall)`.
    pub residual_tol: Ratio,

    /// Upper end of the search bracket.
    ///
    /// The bulk salinity must lie below it.
    pub max_salinity: Constrained<Ratio, UnitIntervalOpen>,
}

impl Default for WallSalinityConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            salinity_tol: Ratio::new::<ratio>(1e-12),
            residual_tol: Ratio::new::<ratio>(1e-12),
            max_salinity: UnitIntervalOpen::new(Ratio::new::<ratio>(0.3))
                .expect("0.3 lies in the open unit interval"),
        }
    }
}

impl WallSalinityConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.salinity_tol.get::<ratio>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol.get::<ratio>(),
        }
    }
}
