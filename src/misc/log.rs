/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The CLI installs [env_logger](https://docs.rs/env_logger/latest/env_logger/), and so output may be narrowed by target, e.g. `RUST_LOG=decision=trace`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [reducing a formula](crate::procedures::transform)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [choosing an atom](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to backtracking during [search](crate::procedures::dpll)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to [reading DIMACS input](crate::context::GenericContext::read_dimacs)
    pub const PARSER: &str = "parser";

    /// Logs related to [preprocessing](crate::preprocessing)
    pub const PREPROCESSING: &str = "preprocessing";
}
