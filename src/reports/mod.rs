/*!
Reports for the context.

The result of a solve is written as either:

- `SAT`, followed by a line with a literal for each atom of the formula, in order of atoms, and a terminating `0`.
  Each literal is the external (DIMACS) representation of the atom with the polarity of its value, and an atom without a value is written with positive polarity.
- `UNSAT`.

```rust
# use dpll_sat::reports::valuation_string;
let valuation = vec![Some(true), Some(false), None];
assert_eq!(valuation_string(&valuation), "1 -2 3 0");
```
*/

use crate::{
    context::{ContextState, GenericContext},
    structures::{
        atom::{self},
        valuation::{CValuation, Valuation},
    },
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The literals of a valuation, with atoms without a value taken as true, followed by ` 0`.
///
/// The terminating ` 0` is always written, so a valuation without atoms is written as ` 0`.
pub fn valuation_string(valuation: &CValuation) -> String {
    let mut the_string = valuation
        .atom_value_pairs()
        .map(|(atom, value)| {
            let int = atom::external(atom);
            let signed = match value {
                Some(false) => -int,
                Some(true) | None => int,
            };
            signed.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ");
    the_string.push_str(" 0");
    the_string
}

impl<R: rand::Rng> GenericContext<R> {
    /// The result of a solve, as `SAT` and a model or as `UNSAT`.
    ///
    /// None, if no solve has completed.
    pub fn result_string(&self) -> Option<String> {
        match self.report() {
            Report::Satisfiable => {
                let model = self.model.as_ref()?;
                Some(format!("SAT\n{}", valuation_string(model)))
            }
            Report::Unsatisfiable => Some("UNSAT".to_string()),
            Report::Unknown => None,
        }
    }
}
