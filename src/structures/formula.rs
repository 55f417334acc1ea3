/*!
A formula, as a collection of clauses paired with a (partial) valuation of the atoms of those clauses.

During a solve a formula is simplified relative to its valuation: clauses satisfied by the valuation are removed, and literals falsified by the valuation are removed from their clause.
So:
- A formula without clauses is satisfied by its valuation.
- A formula with an empty clause is unsatisfiable on its valuation.

Formulas carry no behaviour beyond construction and copy.
The procedures which simplify a formula are found in [procedures](crate::procedures).

```rust
# use dpll_sat::structures::formula::Formula;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let mut formula = Formula::fresh(2);
formula.clauses.push(vec![CLiteral::new(0, true), CLiteral::new(1, false)]);

let copy = formula.clone();
formula.clauses.clear();

assert!(formula.is_empty());
assert_eq!(copy.clause_count(), 1);
```
*/

use crate::structures::{clause::CClause, valuation::CValuation};

/// A collection of clauses and a valuation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The value of each atom, indexed by atom.
    pub valuation: CValuation,

    /// The clauses of the formula, in order.
    pub clauses: Vec<CClause>,
}

impl Formula {
    /// A formula over `atom_count` atoms, without clauses and with each atom valued `None`.
    pub fn fresh(atom_count: usize) -> Self {
        Formula {
            valuation: vec![None; atom_count],
            clauses: Vec::default(),
        }
    }

    /// The count of atoms in the valuation of the formula.
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// True if the formula has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True if some clause of the formula is empty.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }
}
