/*!
The pool of atoms without a value.

The pool is shared by every branch of a search, and so is revised by each branch and must be restored by each branch before control passes back to the branch from which it was entered.

Atoms leave the pool in one of two ways:
- By being *drawn* to be the atom of a branch.
  The search restores a drawn atom after both polarities of the atom have been tried.
- By being *forced* by unit propagation.
  Forced atoms are recorded on a trail, and the search restores those atoms forced below some point by [restore_forced](AtomPool::restore_forced).

```rust
# use dpll_sat::db::pool::AtomPool;
# use dpll_sat::generic::random::MinimalPCG32;
let mut pool = AtomPool::fresh(4);
let mut rng = MinimalPCG32::from_u64(0);

let mark = pool.forced_mark();
assert!(pool.force(2));
let drawn = pool.draw(&mut rng).unwrap();
assert_eq!(pool.len(), 2);

pool.restore(drawn);
pool.restore_forced(mark);
assert_eq!(pool.len(), 4);
```

# Order

The members of the pool are kept in a vector and removal preserves the order of the remaining members, so the index drawn for some seed always names the same atom.
Restored atoms are placed at the end of the vector.
*/

use rand::Rng;

use crate::structures::atom::Atom;

/// The pool of atoms without a value, with a trail of atoms forced from the pool.
#[derive(Clone, Debug, Default)]
pub struct AtomPool {
    /// Atoms without a value.
    atoms: Vec<Atom>,

    /// Atoms removed by [force](AtomPool::force), in order of removal.
    forced: Vec<Atom>,
}

impl AtomPool {
    /// A pool containing each atom in [0..`atom_count`), in order.
    pub fn fresh(atom_count: usize) -> Self {
        AtomPool {
            atoms: (0..atom_count as Atom).collect(),
            forced: Vec::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains(&self, atom: Atom) -> bool {
        self.atoms.contains(&atom)
    }

    /// The atoms of the pool, in pool order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Removes and returns a member of the pool chosen uniformly at random, or None if the pool is empty.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match self.atoms.len() {
            0 => None,
            size => {
                let index = rng.gen_range(0..size);
                Some(self.atoms.remove(index))
            }
        }
    }

    /// Removes `atom` from the pool, if present, returning whether the atom was present.
    pub fn remove(&mut self, atom: Atom) -> bool {
        match self.atoms.iter().position(|member| *member == atom) {
            Some(index) => {
                self.atoms.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes `atom` from the pool, if present, and notes the removal on the forced trail.
    pub fn force(&mut self, atom: Atom) -> bool {
        let removed = self.remove(atom);
        if removed {
            self.forced.push(atom);
        }
        removed
    }

    /// Returns `atom` to the pool.
    pub fn restore(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// The current length of the forced trail, to be passed to [restore_forced](AtomPool::restore_forced).
    pub fn forced_mark(&self) -> usize {
        self.forced.len()
    }

    /// Returns each atom forced since the trail had length `mark` to the pool, most recent first.
    pub fn restore_forced(&mut self, mark: usize) {
        while self.forced.len() > mark {
            if let Some(atom) = self.forced.pop() {
                self.atoms.push(atom);
            }
        }
    }
}

#[cfg(test)]
mod pool_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;

    #[test]
    fn draw_exhausts() {
        let mut pool = AtomPool::fresh(5);
        let mut rng = MinimalPCG32::from_u64(3);

        let mut drawn = Vec::default();
        while let Some(atom) = pool.draw(&mut rng) {
            drawn.push(atom);
        }
        drawn.sort();

        assert_eq!(drawn, vec![0, 1, 2, 3, 4]);
        assert!(pool.draw(&mut rng).is_none());
    }

    #[test]
    fn removal_preserves_order() {
        let mut pool = AtomPool::fresh(5);
        assert!(pool.remove(2));
        assert!(!pool.remove(2));
        assert_eq!(pool.atoms(), &[0, 1, 3, 4]);
    }

    #[test]
    fn forced_restoration() {
        let mut pool = AtomPool::fresh(4);

        assert!(pool.force(1));
        let mark = pool.forced_mark();
        assert!(pool.force(3));
        assert!(!pool.force(3));

        pool.restore_forced(mark);
        assert_eq!(pool.atoms(), &[0, 2, 3]);

        pool.restore_forced(0);
        assert_eq!(pool.atoms(), &[0, 2, 3, 1]);
    }
}
