//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! cdcl_sat is a conflict-driven clause-learning solver.
//! On a satisfiable formula a solve returns a model, and on an unsatisfiable formula a solve returns a resolution proof ending in the empty clause, which may be checked by independent tools.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and clauses are added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//! Or, a context is built directly from a list of clauses with [load].
//!
//! Internally, a solve is viewed in terms of manipulation of a handful of databases:
//! - The formula, together with learned clauses, is stored in a [clause database](crate::db::clause).
//! - The valuation, saved phases, and activity of atoms are stored in an [atom database](crate::db::atom).
//! - The assignments made, and their reasons, are stored on the [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [proof] module for the form of a refutation.
//!
//! # Examples
//!
//! ```rust
//! # use cdcl_sat::reports::Outcome;
//! let mut the_context = cdcl_sat::load(vec![vec![1, 2], vec![-1], vec![-2, 3]]).unwrap();
//!
//! match cdcl_sat::solve(&mut the_context) {
//!     Outcome::Satisfiable(model) => {
//!         assert_eq!(model.as_dimacs(), "-1 2 3 0");
//!     }
//!     _ => panic!("expected a model"),
//! }
//! ```
//!
//! ```rust
//! # use cdcl_sat::reports::Outcome;
//! let mut the_context = cdcl_sat::load(vec![vec![1], vec![-1]]).unwrap();
//!
//! match cdcl_sat::solve(&mut the_context) {
//!     Outcome::Unsatisfiable(proof) => {
//!         let last = &proof.steps()[proof.len() - 1];
//!         assert!(last.clause.is_empty());
//!         assert_eq!(last.pivot, Some(1));
//!     }
//!     _ => panic!("expected a proof"),
//! }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log] to help narrow output to relevant parts of the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Counts of clauses forgotten without information about the clauses can be found with `RUST_LOG=reduction=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod proof;
pub mod reports;
pub mod resolution_buffer;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub use builder::{load, load_with};

use crate::{context::Context, misc::log::targets, reports::Outcome};

/// Determines the satisfiability of the formula in `context`.
///
/// # Panics
/// An error from a solve is the failure of some internal invariant, and results in a panic.
/// Likewise, a context may only be solved once.
/// For a fallible alternative, see [Context::solve].
pub fn solve(context: &mut Context) -> Outcome {
    match context.solve() {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!(target: targets::SOLVE, "Solve failed: {e}");
            panic!("solve failed: {e}");
        }
    }
}
