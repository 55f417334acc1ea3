//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is [CLiteral], which packs an atom and a polarity into a single integer *code*:
//! - The positive literal of atom *a* has code *2a*.
//! - The negative literal of atom *a* has code *2a + 1*.
//!
//! So, the atom of a literal is its code divided by two and the polarity is given by the parity of the code.
//!
//! ```rust
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let literal = CLiteral::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.code(), 158);
//! assert_eq!(literal.negate().code(), 159);
//! assert_eq!(literal.negate().atom(), 79);
//! assert_eq!(literal.negate().as_int(), -80);
//! ```

mod code_literal;
pub use code_literal::CLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal code, `2a` if positive and `2a + 1` if negative.
    fn code(&self) -> u32;

    /// The literal in its (1-based) DIMACS integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}
