//! Procedures for preprocessing formulas.
use pure::set_pure;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::Status,
    structures::formula::Formula,
};

pub mod pure;

impl<R: rand::Rng> GenericContext<R> {
    /// Applies preprocessing to `formula` in accordance with the configuration of the context.
    pub fn preprocess(&mut self, formula: &mut Formula) -> Status {
        if !self.config.preprocessing.value {
            return Status::Normal;
        }

        let status = set_pure(self, formula);
        log::info!(target: targets::PREPROCESSING, "Pure literals set, {} clauses remain", formula.clause_count());
        status
    }
}
