/*!
Methods for choosing an atom, and the polarity of the atom to try first.

# Atoms

An atom is drawn uniformly at random from the [pool](crate::db::pool) of atoms without a value, using the source of rng owned by the context.
Each draw is counted in [Counters::selections](crate::context::Counters::selections).

```rust,ignore
let atom = self.pool.draw(&mut self.rng)?;
```

# Polarity

Both polarities of a drawn atom are tried (on copies of the formula), and so the only decision is which polarity is tried first.
This is given by [Config::polarity_lean](crate::config::Config::polarity_lean), with a draw from the source of rng made only if the lean is strictly between 0 and 1.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Methods related to making decisions.
impl<R: rand::Rng> GenericContext<R> {
    /// Removes an atom chosen uniformly at random from the pool and returns the atom, or None if the pool is empty.
    pub fn select_random_atom(&mut self) -> Option<Atom> {
        let atom = self.pool.draw(&mut self.rng)?;
        self.counters.selections += 1;
        log::trace!(target: targets::DECISION, "Selection {}: atom {atom}", self.counters.selections);
        Some(atom)
    }

    /// The polarity to try first for some drawn atom.
    pub fn first_polarity(&mut self) -> bool {
        let lean = self.config.polarity_lean.value;
        if lean >= 1.0 {
            true
        } else if lean <= 0.0 {
            false
        } else {
            self.rng.gen_bool(lean)
        }
    }
}

#[cfg(test)]
mod decision_tests {
    use crate::{config::Config, context::Context};

    #[test]
    fn selection_counts() {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..3 {
            ctx.fresh_atom().unwrap();
        }

        let mut drawn = Vec::default();
        while let Some(atom) = ctx.select_random_atom() {
            drawn.push(atom);
        }
        drawn.sort();

        assert_eq!(drawn, vec![0, 1, 2]);
        assert_eq!(ctx.counters.selections, 3);
    }

    #[test]
    fn fixed_polarity() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.first_polarity());

        ctx.config.polarity_lean.value = 0.0;
        assert!(!ctx.first_polarity());
    }

    #[test]
    fn draws_only_when_lean_is_strict() {
        use rand::RngCore;

        let mut ctx = Context::from_config(Config::default());
        let mut untouched = ctx.rng.clone();
        ctx.first_polarity();
        assert_eq!(ctx.rng.next_u32(), untouched.next_u32());

        ctx.config.polarity_lean.value = 0.5;
        let mut untouched = ctx.rng.clone();
        ctx.first_polarity();
        assert_ne!(ctx.rng.clone().next_u64(), untouched.next_u64());
    }
}
