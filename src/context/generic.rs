use crate::{
    config::Config,
    db::pool::AtomPool,
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        formula::Formula,
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use dpll_sat::context::GenericContext;
/// # use dpll_sat::generic::random::MinimalPCG32;
/// # use dpll_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config_and_rng(
///     Config::default(),
///     MinimalPCG32::from_u64(11),
/// );
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula given to the context.
    ///
    /// A solve works on copies of the formula, and so the formula is unchanged by a solve.
    pub formula: Formula,

    /// The atoms without a value, shared across every branch of a search.
    pub pool: AtomPool,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The valuation of the first satisfied formula found, if any.
    pub(crate) model: Option<CValuation>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A context with the given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            pool: AtomPool::default(),
            state: ContextState::Configuration,
            rng,
            model: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The valuation on which the formula of the context was found to be satisfied, if a solve has found one.
    pub fn model(&self) -> Option<&CValuation> {
        self.model.as_ref()
    }

    /// The value of `atom` on the model of the context, if there is a model and the atom has a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.model
            .as_ref()
            .and_then(|model| model.value_of(atom).flatten())
    }

    pub fn atom_count(&self) -> usize {
        self.formula.atom_count()
    }

    pub fn clause_count(&self) -> usize {
        self.formula.clause_count()
    }

    /// Resizes the formula of the context to `atom_count` atoms without a value, and resets the pool to match.
    pub(crate) fn ensure_atoms(&mut self, atom_count: usize) {
        self.formula.valuation.resize(atom_count, None);
        self.pool = AtomPool::fresh(atom_count);
    }

    /// A fresh atom, added to the formula without a value and added to the pool.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        self.check_input()?;
        let atom = match Atom::try_from(self.formula.atom_count()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::ErrorKind::from(err::BuildError::AtomsExhausted)),
        };
        self.formula.valuation.push(None);
        self.pool.restore(atom);
        Ok(atom)
    }

    /// Adds a clause to the formula of the context.
    ///
    /// The clause is added as given, so duplicate literals are kept and an empty clause is permitted.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        self.check_input()?;
        let atom_count = self.formula.atom_count();
        if let Some(atom) = clause.atoms().find(|atom| *atom as usize >= atom_count) {
            return Err(err::ErrorKind::from(err::BuildError::AtomOutOfRange(atom)));
        }

        log::trace!("Clause added: {}", clause.as_dimacs(true));
        self.formula.clauses.push(clause);
        Ok(())
    }

    /// Whether the model of the context satisfies every clause of the formula given to the context.
    ///
    /// False if there is no model.
    pub fn model_satisfies_input(&self) -> bool {
        match &self.model {
            None => false,
            Some(model) => self
                .formula
                .clauses
                .iter()
                .all(|clause| clause.satisfied_on(model)),
        }
    }

    /// Ok if the formula of the context may be revised, and the context is moved to the input state.
    pub(crate) fn check_input(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            _ => Err(err::ErrorKind::from(err::StateError::SolveComplete)),
        }
    }
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Replaces the source of rng of the context with a source seeded by `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod generic_tests {
    use super::*;
    use crate::{
        context::Context,
        structures::literal::{CLiteral, Literal},
    };

    #[test]
    fn out_of_range_clause() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom().unwrap();

        assert!(ctx.add_clause(vec![CLiteral::new(p, true)]).is_ok());
        assert_eq!(
            ctx.add_clause(vec![CLiteral::new(p + 1, false)]),
            Err(ErrorKind::Build(err::BuildError::AtomOutOfRange(1)))
        );
    }

    #[test]
    fn no_input_after_solve() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom().unwrap();
        assert!(ctx.solve().is_ok());

        assert_eq!(
            ctx.add_clause(vec![CLiteral::new(p, true)]),
            Err(ErrorKind::State(err::StateError::SolveComplete))
        );
    }
}
