use crate::{config::Config, generic::random::MinimalPCG32};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration, with rng seeded by 0.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::from_u64(0))
    }
}
