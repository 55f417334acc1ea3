//! Determines the satisfiability of the formula in a context.
//!
//! A solve works on a copy of the formula of the context:
//!
//! 1. If [preprocessing](crate::preprocessing) is enabled, pure literals are valued on the copy.
//! 2. A [search](crate::procedures::dpll) is made on the copy.
//! 3. If the search completed, the context is satisfiable, and otherwise the context is unsatisfiable.
//!
//! A context may be solved once.
//!
//! # Example
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//! let p = the_context.fresh_atom().unwrap();
//!
//! let _ = the_context.add_clause(vec![CLiteral::new(p, true)]);
//! let _ = the_context.add_clause(vec![CLiteral::new(p, false)]);
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! assert!(the_context.solve().is_err());
//! ```

use crate::{
    context::{ContextState, GenericContext},
    procedures::{SearchOk, Status},
    reports::Report,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            _ => return Err(err::ErrorKind::from(err::StateError::SolveComplete)),
        }
        self.state = ContextState::Solving;

        let total_time = std::time::Instant::now();
        let mut formula = self.formula.clone();

        let result = match self.preprocess(&mut formula) {
            Status::Satisfied => {
                self.note_satisfied(&formula);
                SearchOk::Completed
            }
            Status::Unsatisfied => SearchOk::Normal,
            Status::Normal => self.dpll(&mut formula),
        };

        if result == SearchOk::Normal {
            self.state = ContextState::Unsatisfiable;
        }

        self.counters.time = total_time.elapsed();
        log::info!(
            "Solve: {} after {} selections, {} branches, and {} conflicts in {:.2?}",
            self.state,
            self.counters.selections,
            self.counters.branches,
            self.counters.conflicts,
            self.counters.time
        );

        Ok(self.report())
    }
}
