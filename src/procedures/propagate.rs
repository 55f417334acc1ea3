/*!
Unit propagation.

A unit clause is a clause with exactly one literal, and so forces the value of the atom of the literal.

Propagation repeatedly takes the *first* unit clause of a formula, values the atom of the literal of the clause to make the literal true, and [reduces](crate::procedures::transform) the formula by that value.
After each reduction the search for a unit clause begins again from the first clause, as the reduction may have removed clauses or revealed a unit clause earlier in the formula.

Each atom valued by propagation is removed from the [pool](crate::db::pool) of the context.
With [scoped](crate::config::PoolRestoration::Scoped) pool restoration the removal is noted on the forced trail of the pool, so the atom may be restored when the search leaves the formula.

# Fixpoint

If propagation returns [Normal](Status::Normal) no clause of the formula has exactly one literal.

```rust
# use dpll_sat::config::Config;
# use dpll_sat::context::Context;
# use dpll_sat::procedures::Status;
# use dpll_sat::structures::formula::Formula;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = [0, 1, 2].map(|_| ctx.fresh_atom().unwrap());
let [p, q, r] = [p, q, r].map(|atom| CLiteral::new(atom, true));

let mut formula = ctx.formula.clone();
formula.clauses = vec![vec![-p, q, r], vec![p], vec![-q, r]];

assert_eq!(ctx.unit_propagate(&mut formula), Status::Normal);
assert_eq!(formula.valuation[0], Some(true));
assert!(formula.clauses.iter().all(|clause| clause.len() != 1));
```
*/

use crate::{
    config::PoolRestoration,
    context::GenericContext,
    misc::log::targets::{self},
    procedures::{transform::apply_transform, Status},
    structures::{formula::Formula, literal::Literal},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Values each atom forced by a unit clause of `formula`, until no unit clause remains or the status of the formula is known.
    pub fn unit_propagate(&mut self, formula: &mut Formula) -> Status {
        if formula.clauses.is_empty() {
            return Status::Satisfied;
        }

        loop {
            let mut unit = None;
            for clause in &formula.clauses {
                match clause.as_slice() {
                    [] => {
                        self.counters.conflicts += 1;
                        return Status::Unsatisfied;
                    }
                    [literal] => {
                        unit = Some(*literal);
                        break;
                    }
                    _ => {}
                }
            }

            let literal = match unit {
                Some(literal) => literal,
                None => return Status::Normal,
            };

            let atom = literal.atom();
            log::trace!(target: targets::PROPAGATION, "Unit {literal}");
            formula.valuation[atom as usize] = Some(literal.polarity());
            self.counters.propagations += 1;

            match self.config.pool_restoration.value {
                PoolRestoration::Scoped => self.pool.force(atom),
                PoolRestoration::DecisionsOnly => self.pool.remove(atom),
            };

            match apply_transform(formula, atom) {
                Status::Normal => {}
                Status::Satisfied => return Status::Satisfied,
                Status::Unsatisfied => {
                    self.counters.conflicts += 1;
                    return Status::Unsatisfied;
                }
            }
        }
    }
}

#[cfg(test)]
mod propagation_tests {
    use super::*;
    use crate::{
        config::Config,
        context::Context,
        structures::{clause::CClause, literal::CLiteral},
    };

    fn context_and_formula(atoms: usize, clauses: Vec<CClause>) -> (Context, Formula) {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..atoms {
            ctx.fresh_atom().unwrap();
        }
        let mut formula = ctx.formula.clone();
        formula.clauses = clauses;
        (ctx, formula)
    }

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_int(int).unwrap()
    }

    #[test]
    fn empty_formula_is_satisfied() {
        let (mut ctx, mut formula) = context_and_formula(2, vec![]);
        assert_eq!(ctx.unit_propagate(&mut formula), Status::Satisfied);
        assert_eq!(ctx.pool.len(), 2);
    }

    #[test]
    fn empty_clause_is_unsatisfied() {
        let (mut ctx, mut formula) = context_and_formula(2, vec![vec![lit(1), lit(2)], vec![]]);
        assert!(formula.has_empty_clause());
        assert_eq!(ctx.unit_propagate(&mut formula), Status::Unsatisfied);
        assert_eq!(ctx.counters.conflicts, 1);
    }

    #[test]
    fn chain() {
        let (mut ctx, mut formula) = context_and_formula(
            3,
            vec![vec![lit(-1), lit(2)], vec![lit(-2), lit(3)], vec![lit(1)]],
        );

        assert_eq!(ctx.unit_propagate(&mut formula), Status::Satisfied);
        assert_eq!(formula.valuation, vec![Some(true), Some(true), Some(true)]);
        assert!(ctx.pool.is_empty());
        assert_eq!(ctx.counters.propagations, 3);
    }

    #[test]
    fn conflict() {
        let (mut ctx, mut formula) =
            context_and_formula(2, vec![vec![lit(1)], vec![lit(-1), lit(2)], vec![lit(-2)]]);

        assert_eq!(ctx.unit_propagate(&mut formula), Status::Unsatisfied);
        assert!(formula.has_empty_clause());
        assert_eq!(ctx.counters.conflicts, 1);
    }

    #[test]
    fn first_unit_first() {
        let (mut ctx, mut formula) = context_and_formula(
            4,
            vec![
                vec![lit(1), lit(4), lit(3)],
                vec![lit(-3)],
                vec![lit(2)],
                vec![lit(-1), lit(-4)],
            ],
        );

        assert_eq!(ctx.unit_propagate(&mut formula), Status::Normal);
        assert_eq!(formula.valuation, vec![None, Some(true), Some(false), None]);
        assert_eq!(ctx.pool.atoms(), &[0, 3]);
        assert_eq!(
            formula.clauses,
            vec![vec![lit(1), lit(4)], vec![lit(-1), lit(-4)]]
        );
    }

    #[test]
    fn forced_atoms_are_trailed() {
        let (mut ctx, mut formula) =
            context_and_formula(3, vec![vec![lit(2)], vec![lit(1), lit(-2), lit(3)]]);

        let mark = ctx.pool.forced_mark();
        assert_eq!(ctx.unit_propagate(&mut formula), Status::Normal);
        assert_eq!(ctx.pool.atoms(), &[0, 2]);

        ctx.pool.restore_forced(mark);
        assert_eq!(ctx.pool.len(), 3);
    }
}
