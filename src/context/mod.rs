/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and a [Context] fixes the source to [MinimalPCG32](crate::generic::random::MinimalPCG32).

A context owns everything a solve revises: the configuration, counters, the source of randomness, the input formula, and the [pool](crate::db::pool) of atoms without a value.
Nothing is global, so any number of contexts may be used independently.

# Example
```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = vec![CLiteral::new(p, false)];
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a context.
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// A satisfying valuation has been found.
    Satisfiable,

    /// The search was exhausted without finding a satisfying valuation.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
