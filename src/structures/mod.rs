//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A [formula] 𝐅 is a collection of [clauses](clause), interpreted as the conjunction of those clauses, paired with a (partial) [valuation].
//!
//! Formulas are the only structure copied during a solve: each branch of the search works on a private copy, while the pool of atoms without a value is shared by every branch (see [db::pool](crate::db::pool)).
//!
//! ## (Boolean) values
//!
//! Throughout, the value of an atom is an optional boolean.
//! `None` is read as 'no value', `Some(true)` as true, and `Some(false)` as false.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
