//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, kept in the order given.
//! Duplicate literals are permitted, and are not removed.
//!
//! ```rust
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! # use dpll_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(2, true),
//!                   CLiteral::new(4, false),
//!                   CLiteral::new(3, false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "3 -5 -4 0");
//!
//! let mut valuation = vec![Some(false); 5];
//! assert!(clause.satisfied_on(&valuation));
//!
//! valuation[3] = Some(true);
//! valuation[4] = Some(true);
//! assert!(!clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause with exactly one literal is a 'unit' clause, and forces the value of the atom of that literal.

use std::ops::Deref;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

impl<T: Deref<Target = [CLiteral]>> Clause for T {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.as_int().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }

        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.literal_value(*literal) == Some(true))
    }
}
