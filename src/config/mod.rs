/*!
Configuration of a context.

All configuration for a context is contained within the [Config] struct, and each configurable value is a [ConfigOption] which records the bounds of the value alongside the value.

The default configuration is a plain randomized DPLL search:
- Atoms are chosen uniformly at random, and the positive polarity of a chosen atom is tried first.
- Every removal from the pool of atoms is undone on backtracking.
- No preprocessing.
*/

mod config_option;
pub use config_option::ConfigOption;

mod pool_restoration;
pub use pool_restoration::PoolRestoration;

mod rng;
pub use rng::PolarityLean;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of trying the positive polarity of a chosen atom first.
    ///
    /// Whichever polarity is tried first, the other polarity is tried second.
    /// A random draw is made only if the value is strictly between 0 and 1.
    /// So, with the default of 1 the positive polarity is always tried first and the source of rng is used only to draw atoms, rather than also drawing a polarity at each branch.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// Which removals from the pool of atoms are undone when backtracking.
    pub pool_restoration: ConfigOption<PoolRestoration>,

    /// Enable preprocessing of 𝐅, by valuing pure literals before search.
    pub preprocessing: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 1.0,
            },

            pool_restoration: ConfigOption {
                name: "pool_restoration",
                min: PoolRestoration::MIN,
                max: PoolRestoration::MAX,
                value: PoolRestoration::Scoped,
            },

            preprocessing: ConfigOption {
                name: "preprocessing",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
