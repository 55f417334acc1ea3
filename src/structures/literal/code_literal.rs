use crate::structures::atom::{self, Atom};

use super::Literal;

/// The representation of a literal as a single code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    code: u32,
}

impl CLiteral {
    /// The literal with the given code.
    pub fn from_code(code: u32) -> Self {
        Self { code }
    }

    /// The literal of a non-zero DIMACS integer, if the integer is in range.
    pub fn from_int(int: isize) -> Option<Self> {
        atom::from_external(int).map(|atom| Self::new(atom, int.is_positive()))
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => Self { code: 2 * atom },
            false => Self { code: 2 * atom + 1 },
        }
    }

    fn negate(&self) -> Self {
        Self {
            code: self.code ^ 1,
        }
    }

    fn atom(&self) -> Atom {
        self.code / 2
    }

    fn polarity(&self) -> bool {
        self.code % 2 == 0
    }

    fn code(&self) -> u32 {
        self.code
    }

    fn as_int(&self) -> isize {
        match self.polarity() {
            true => atom::external(self.atom()),
            false => -atom::external(self.atom()),
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
