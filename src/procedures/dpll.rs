/*!
The recursive search.

A call to [dpll](GenericContext::dpll) on some formula:

1. [Propagates](crate::procedures::propagate) unit clauses.
   - If the formula is satisfied, the formula is reported and the search is [completed](SearchOk::Completed).
   - If some clause is empty, the formula is abandoned.
2. [Draws](crate::procedures::decision) an atom from the pool.
   - If the pool is empty the formula is abandoned, even if the formula has clauses.
3. For each polarity of the drawn atom, the atom is valued on a copy of the formula and the copy is [reduced](crate::procedures::transform).
   - If the copy is satisfied, the copy is reported and the search is completed.
   - If some clause of the copy is empty, the other polarity is tried.
   - Otherwise, the search continues on the copy, and a completed search below the copy completes the search.
4. If neither polarity completed the search, the drawn atom is returned to the pool and the formula is abandoned.

# The pool

The pool is shared by every call, and the search keeps the following invariant:

- On abandoning a formula, the pool is as it was when the search entered the formula.

So, each call returns the atom it drew, and (with [scoped](crate::config::PoolRestoration::Scoped) restoration) the atoms forced by propagation on the formula or any copy of the formula.

With [decisions only](crate::config::PoolRestoration::DecisionsOnly) restoration atoms forced by propagation are not returned, and the invariant does not hold.

# Depth

The depth of recursion is bounded by the count of atoms drawn on a path through the search, and so by the count of atoms.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::{transform::apply_transform, SearchOk, Status},
    structures::formula::Formula,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Searches for a valuation which satisfies `formula`, extending the valuation of the formula.
    ///
    /// On finding such a valuation the valuation is stored as the model of the context and [SearchOk::Completed] is returned.
    /// Otherwise, [SearchOk::Normal] is returned and the pool is restored.
    pub fn dpll(&mut self, formula: &mut Formula) -> SearchOk {
        let mark = self.pool.forced_mark();

        let result = self.dpll_frame(formula);
        if result == SearchOk::Normal {
            self.pool.restore_forced(mark);
        }

        result
    }

    fn dpll_frame(&mut self, formula: &mut Formula) -> SearchOk {
        match self.unit_propagate(formula) {
            Status::Satisfied => {
                self.note_satisfied(formula);
                return SearchOk::Completed;
            }
            Status::Unsatisfied => return SearchOk::Normal,
            Status::Normal => {}
        }

        let atom = match self.select_random_atom() {
            Some(atom) => atom,
            None => {
                log::trace!(target: targets::BACKTRACK, "Pool exhausted with {} clauses", formula.clause_count());
                return SearchOk::Normal;
            }
        };

        let first = self.first_polarity();
        for polarity in [first, !first] {
            self.counters.branches += 1;

            let mut branch = formula.clone();
            branch.valuation[atom as usize] = Some(polarity);

            match apply_transform(&mut branch, atom) {
                Status::Satisfied => {
                    self.note_satisfied(&branch);
                    return SearchOk::Completed;
                }
                Status::Unsatisfied => {
                    self.counters.conflicts += 1;
                    continue;
                }
                Status::Normal => {}
            }

            if self.dpll(&mut branch) == SearchOk::Completed {
                return SearchOk::Completed;
            }
        }

        log::trace!(target: targets::BACKTRACK, "Backtrack over atom {atom}");
        self.pool.restore(atom);
        SearchOk::Normal
    }

    /// Stores the valuation of a satisfied formula as the model of the context.
    pub(crate) fn note_satisfied(&mut self, formula: &Formula) {
        self.model = Some(formula.valuation.clone());
        self.state = ContextState::Satisfiable;
    }
}
