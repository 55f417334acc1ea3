use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of atoms drawn at random from the pool.
    pub selections: usize,

    /// A count of atoms valued by unit propagation.
    pub propagations: usize,

    /// A count of formulas found to contain an empty clause.
    pub conflicts: usize,

    /// A count of formulas copied to try some polarity of a drawn atom.
    pub branches: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
