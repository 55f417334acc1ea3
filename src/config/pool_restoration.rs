use std::str::FromStr;

/// Which removals from the [pool of atoms](crate::db::pool::AtomPool) are undone when the search backtracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PoolRestoration {
    /// Restore every atom removed while searching below a branch, whether chosen or forced by propagation.
    Scoped = 0,

    /// Restore only atoms chosen for branching.
    ///
    /// Atoms forced by propagation on some formula remain outside the pool after the formula is discarded, and so are never chosen on any sibling branch.
    /// As a consequence, an unsatisfiable report may be given for a satisfiable formula.
    DecisionsOnly,
}

impl std::fmt::Display for PoolRestoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scoped => write!(f, "scoped"),
            Self::DecisionsOnly => write!(f, "decisions"),
        }
    }
}

impl PoolRestoration {
    /// The minimum PoolRestoration type.
    pub const MIN: PoolRestoration = PoolRestoration::Scoped;

    /// The maximum PoolRestoration type.
    pub const MAX: PoolRestoration = PoolRestoration::DecisionsOnly;
}

impl FromStr for PoolRestoration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scoped" => Ok(Self::Scoped),

            "decisions" => Ok(Self::DecisionsOnly),

            _unknown_string => Err(()),
        }
    }
}
