//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat determines satisfiability by the Davis–Putnam–Logemann–Loveland procedure, with the atom to branch on drawn uniformly at random from the atoms without a value.
//!
//! The search is deliberately plain: no clause learning, no restarts, and no heuristics beyond unit propagation and (optionally) pure literal elimination.
//! In return, a run is fully determined by the formula, the configuration, and a seed.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration and a source of randomness.
//! Clauses may be added though the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! During a solve:
//! - A formula is a list of clauses paired with a valuation, and each branch of the search works on a [copy](crate::structures::formula) of a formula.
//! - The atoms without a value are kept in a [pool](crate::db::pool) shared by every branch.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect the dynamics of a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use dpll_sat::context::Context;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = "
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.result_string().unwrap(), "UNSAT");
//! ```
//!
//! + Solve with a seed, and write the model.
//!
//! ```rust
//! # use dpll_sat::context::Context;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.set_seed(7);
//!
//! let dimacs = "p cnf 3 2\n1 0\n-1 -3 0\n";
//! assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! assert!(the_context.model_satisfies_input());
//! assert_eq!(the_context.result_string().unwrap(), "SAT\n1 2 -3 0");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Atoms drawn during a search can be found with `RUST_LOG=decision=trace …` or,
//! - Backtracking over atoms can be found with `RUST_LOG=backtrack=trace …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod preprocessing;

pub mod reports;
