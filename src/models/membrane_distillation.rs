//! Air gap membrane distillation node model.
//!
//! [`AgmdNode`] is a [`twine_core::Model`] that evaluates every transport
//! correlation in [`crate::support::agmd`] at one node of an AGMD module.
//! The computational core is in the internal `core` module.

pub(crate) mod core;

pub use self::core::{MembraneModule, NodeError, NodeInput, NodeResults, WallSalinityConfig};

use twine_core::Model;

use crate::support::properties::{BrineModel, MoistAirModel};

/// One node of an AGMD module with its property providers.
///
/// Unlike the bare correlations, the node validates the module geometry,
/// the node input, and the properties returned by the providers before
/// evaluating anything. It also resolves the coupling between wall salinity
/// and the wall-side Schmidt number; see [`WallSalinityConfig`].
#[derive(Debug, Clone)]
pub struct AgmdNode<Brine, Air> {
    module: MembraneModule,
    config: WallSalinityConfig,
    brine: Brine,
    air: Air,
}

impl<Brine, Air> AgmdNode<Brine, Air> {
    /// Creates a node with the default wall salinity solver configuration.
    #[must_use]
    pub fn new(module: MembraneModule, brine: Brine, air: Air) -> Self {
        Self {
            module,
            config: WallSalinityConfig::default(),
            brine,
            air,
        }
    }

    /// Returns the node with the given wall salinity solver configuration.
    #[must_use]
    pub fn with_config(self, config: WallSalinityConfig) -> Self {
        Self { config, ..self }
    }

    /// The module geometry and materials.
    #[must_use]
    pub fn module(&self) -> &MembraneModule {
        &self.module
    }
}

impl<Brine, Air> Model for AgmdNode<Brine, Air>
where
    Brine: BrineModel,
    Air: MoistAirModel,
{
    type Input = NodeInput;
    type Output = NodeResults;
    type Error = NodeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::evaluate(&self.module, &self.config, &self.brine, &self.air, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use super::core::test_support::{TestAir, TestBrine, input, module};

    #[test]
    fn model_call_delegates_to_core() {
        let brine = TestBrine::constant();
        let node = AgmdNode::new(module(), brine, TestAir);

        let via_model = node.call(&input()).expect("node should evaluate");
        let via_core = super::core::evaluate(
            node.module(),
            &WallSalinityConfig::default(),
            &brine,
            &TestAir,
            &input(),
        )
        .expect("core should evaluate");

        assert_eq!(via_model, via_core);
        assert!(via_model.wall_salinity.get::<ratio>() > input().bulk_salinity.get::<ratio>());
    }

    #[test]
    fn custom_config_is_used() {
        let config = WallSalinityConfig {
            max_iters: 1,
            ..WallSalinityConfig::default()
        };
        let node = AgmdNode::new(module(), TestBrine::constant(), TestAir).with_config(config);

        assert!(matches!(
            node.call(&input()),
            Err(NodeError::MaxIters { .. })
        ));

        let relaxed = node.with_config(WallSalinityConfig::default());
        let results = relaxed.call(&input()).expect("default config should converge");
        assert_relative_eq!(
            results.mass_flux.value,
            crate::support::agmd::mass_flux(
                &module().membrane,
                &module().air_gap,
                &input().vapor_conditions()
            )
            .value
        );
    }
}
