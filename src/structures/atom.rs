/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a formula with *m* atoms are [0..*m*).

```rust
# use dpll_sat::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&96));
```

This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`.

# External atoms

In DIMACS input atoms are written from 1, so the external representation of atom *a* is *a + 1*.
See [external](external) and [from_external](from_external).

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded so the [literal code](crate::structures::literal) `2a + 1` of any atom fits in a u32.
pub const ATOM_MAX: Atom = u32::MAX >> 1;

/// The (1-based) DIMACS representation of an atom.
pub fn external(atom: Atom) -> isize {
    atom as isize + 1
}

/// The atom of some non-zero DIMACS integer, ignoring the sign.
///
/// Returns None on zero or if the magnitude is beyond [ATOM_MAX].
pub fn from_external(int: isize) -> Option<Atom> {
    match int.unsigned_abs() {
        0 => None,
        magnitude => match Atom::try_from(magnitude - 1) {
            Ok(atom) if atom <= ATOM_MAX => Some(atom),
            _ => None,
        },
    }
}

#[cfg(test)]
mod atom_tests {
    use super::*;

    #[test]
    fn external_round() {
        assert_eq!(external(0), 1);
        assert_eq!(from_external(1), Some(0));
        assert_eq!(from_external(-7), Some(6));
        assert_eq!(from_external(0), None);
    }
}
