/*!
Reduction of a formula relative to the value of a single atom.

Given an atom with a value, every clause is examined in order:
- A clause containing the literal made true by the value is satisfied, and is removed from the formula.
- Otherwise, each occurrence of the literal made false by the value is removed from the clause.

The reduction stops as soon as some clause becomes empty, or the formula has no clauses.

```rust
# use dpll_sat::procedures::{Status, transform::apply_transform};
# use dpll_sat::structures::formula::Formula;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);

let mut formula = Formula::fresh(2);
formula.clauses = vec![vec![p, q], vec![-p, q], vec![q]];
formula.valuation[0] = Some(false);

assert_eq!(apply_transform(&mut formula, 0), Status::Normal);
assert_eq!(formula.clauses, vec![vec![q], vec![q]]);
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::Status,
    structures::{
        atom::Atom,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Reduces `formula` relative to the value of `atom` in the valuation of the formula.
///
/// Returns:
/// - [Status::Unsatisfied] if some clause became empty.
/// - [Status::Satisfied] if the formula has no remaining clauses.
/// - [Status::Normal] otherwise, including when `atom` has no value.
pub fn apply_transform(formula: &mut Formula, atom: Atom) -> Status {
    let value = match formula.valuation.value_of(atom) {
        Some(Some(value)) => value,
        _ => return Status::Normal,
    };

    let true_literal = CLiteral::new(atom, value);
    let false_literal = true_literal.negate();
    log::trace!(target: targets::REDUCTION, "Reducing by {true_literal}");

    let mut index = 0;
    while index < formula.clauses.len() {
        let clause = &mut formula.clauses[index];

        if clause.contains(&true_literal) {
            formula.clauses.remove(index);
            if formula.clauses.is_empty() {
                return Status::Satisfied;
            }
            // The next clause now has the index of the removed clause.
            continue;
        }

        let size = clause.len();
        clause.retain(|literal| *literal != false_literal);
        if clause.len() < size && clause.is_empty() {
            log::trace!(target: targets::REDUCTION, "Clause {index} emptied by {true_literal}");
            return Status::Unsatisfied;
        }

        index += 1;
    }

    Status::Normal
}
