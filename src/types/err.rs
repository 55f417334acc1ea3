//! Error types used in the library.
//!
//! - Parse errors are external --- e.g. a DIMACS input without a problem line.
//! - Build and state errors follow from programmatic use of a [context](crate::context).
//!
//! Note, the outcomes of a search (a satisfied or an unsatisfiable formula) are not errors.
//! These are returned as [Status](crate::procedures::Status) and [Report](crate::reports::Report).
//
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
    State(StateError),
}

/// Noted errors when adding clauses to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contains an atom which is not part of the context.
    AtomOutOfRange(Atom),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input, or no problem specification.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A literal at the given line names an atom beyond those declared by the problem specification.
    AtomOutOfRange(usize),

    /// The input ended part way through a clause.
    UnterminatedClause,

    /// The count of clauses read differs from the count declared by the problem specification.
    ClauseCount { expected: usize, found: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The context has already been solved, and the formula may not be revised.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(BuildError::AtomOutOfRange(atom)) => {
                write!(f, "atom {atom} is not part of the context")
            }
            Self::Build(BuildError::AtomsExhausted) => write!(f, "no fresh atoms remain"),
            Self::Parse(ParseError::ProblemSpecification) => {
                write!(f, "missing or malformed problem line")
            }
            Self::Parse(ParseError::Line(line)) => write!(f, "unable to read line {line}"),
            Self::Parse(ParseError::MisplacedProblem(line)) => {
                write!(f, "problem line at line {line} follows a clause")
            }
            Self::Parse(ParseError::AtomOutOfRange(line)) => {
                write!(f, "literal at line {line} exceeds the declared variable count")
            }
            Self::Parse(ParseError::UnterminatedClause) => {
                write!(f, "the final clause is missing a terminating 0")
            }
            Self::Parse(ParseError::ClauseCount { expected, found }) => {
                write!(f, "expected {expected} clauses, found {found}")
            }
            Self::State(StateError::SolveComplete) => write!(f, "the context has been solved"),
        }
    }
}

impl std::error::Error for ErrorKind {}
