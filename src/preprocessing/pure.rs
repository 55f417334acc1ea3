//! Procedures to identify pure literals.
use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::{transform::apply_transform, Status},
    structures::{
        atom::Atom,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an interator over clauses returns a pair of vectors of the atoms of pure literals relative to those clauses.
///
/// In other words, the first vector contains all the atoms which occur only with negative polarity and the second vector contains all the atoms which occur only with positive polarity.
pub fn pure_literals<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l CLiteral>>,
) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    clauses.for_each(|literals| {
        for literal in literals {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    });

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// Values each atom of a pure literal of `formula` to match the polarity of the literal, and reduces the formula by the value.
///
/// Each valued atom is removed from the pool of the context.
pub fn set_pure<R: rand::Rng>(context: &mut GenericContext<R>, formula: &mut Formula) -> Status {
    let (f, t) = pure_literals(formula.clauses.iter().map(|clause| clause.iter()));

    let valued = f
        .into_iter()
        .map(|atom| (atom, false))
        .chain(t.into_iter().map(|atom| (atom, true)));

    for (atom, value) in valued {
        log::trace!(target: targets::PREPROCESSING, "Pure {}", CLiteral::new(atom, value));
        formula.valuation[atom as usize] = Some(value);
        context.pool.remove(atom);

        match apply_transform(formula, atom) {
            Status::Normal => {}
            status => return status,
        }
    }

    Status::Normal
}
