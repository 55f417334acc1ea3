/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where index *a* holds the value of atom *a*:
 -  *v*\[a\] = Some(true) *if any only if* 𝐯(𝐚) = true.
 -  *v*\[a\] = Some(false) *if any only if* 𝐯(𝐚) = false.
 -  *v*\[a\] = None *if any only if* 𝐯(𝐚) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use dpll_sat::structures::valuation::Valuation;
# use dpll_sat::structures::literal::{CLiteral, Literal};
let valuation = vec![Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(3), None);
assert_eq!(valuation.literal_value(CLiteral::new(2, false)), Some(true));
assert_eq!(valuation.unvalued_atoms().count(), 1);
```
*/

use std::ops::Deref;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// The value of a literal, if the atom of the literal has some value.
    ///
    /// Atoms which are not part of the valuation are treated as having no value.
    fn literal_value(&self, literal: CLiteral) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl<T: Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        match self.value_of(literal.atom()) {
            Some(Some(value)) => Some(value == literal.polarity()),
            _ => None,
        }
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (index as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| match value {
                None => Some(atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
