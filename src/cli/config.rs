/// A collection of configuration options relevant only to the CLI.
pub struct CliConfig {
    /// The seed for the source of rng, if one was given.
    pub seed: Option<u64>,

    /// The size of the stack of the thread on which a solve is made, in MiB.
    pub stack_mb: usize,

    /// Whether to check a model against the formula read, if a model is found.
    pub verify: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            seed: None,
            stack_mb: 256,
            verify: false,
        }
    }
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}
