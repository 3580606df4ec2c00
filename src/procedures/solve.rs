//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a state machine, with each state given by a [Phase], and each transition made by a single call to [step](Context::step):
//!
//! ```none
//!                 +--------------------------------------------+
//!                 |                                            |
//!                 ⌄                                            |
//! --> PROPAGATING ---------------> DECIDING --------------> SATISFIABLE
//!       ⌃     |                        |  |
//!       |     | on a conflict          |  +---------------> ABORTED, if cancelled or out of time
//!       |     ⌄                        |
//!       |   CONFLICT ------------------|-------------------> UNSATISFIABLE, if at level zero
//!       |     |                        |
//!       |     ⌄                        |
//!       +-- BACKTRACKING               |
//!       |                              |
//!       +------------------------------+ after a decision, or a restart
//! ```
//!
//! - [Propagating](Phase::Propagating) applies [BCP](crate::procedures::bcp) to every assignment not yet propagated.
//! - [Conflict](Phase::Conflict) either [refutes](Context::refute) the formula, if no decision has been made, or [analyses](Context::conflict_analysis) the conflict.
//! - [Backtracking](Phase::Backtracking) [backjumps](Context::backjump) to the assertion level of the learned clause, stores the clause, and asserts its literal.
//!   Then, learned clauses may be removed by [subsumption or forgetting](crate::procedures::reduction).
//! - [Deciding](Phase::Deciding) checks for cancellation and the time limit, possibly restarts, and otherwise [makes a decision](Context::make_decision).
//!
//! The initial phase is [Propagating](Phase::Propagating), unless a clause conflicting with the valuation was found while building the context, in which case the initial phase is [Conflict](Phase::Conflict).
//!
//! # Restarts
//!
//! If restarts are enabled, a restart is made at the first decision after `luby_u * luby(i)` conflicts since the last restart, where luby(i) is the current element of the [luby sequence](crate::generic::luby).
//! A restart backjumps to level zero, and keeps learned clauses and saved phases.
//!
//! # Example
//!
//! ```rust
//! # use cdcl_sat::context::Context;
//! # use cdcl_sat::config::Config;
//! # use cdcl_sat::reports::{Outcome, Report};
//! let mut the_context = Context::from_config(Config::default());
//!
//! for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! let outcome = the_context.solve().unwrap();
//! assert_eq!(outcome.report(), Report::Unsatisfiable);
//!
//! match outcome {
//!     Outcome::Unsatisfiable(proof) => assert!(proof.is_refutation()),
//!     _ => panic!("expected a refutation"),
//! }
//! ```
//!
//! # Literature
//!
//! The core solve procedure follows [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0) and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    context::{Context, ContextState},
    db::{keys::ClauseKey, trail::AssignmentSource},
    misc::log::targets::{self},
    procedures::{analysis::AssertingClause, decision::DecisionOk},
    reports::{Model, Outcome},
    structures::atom::Atom,
    types::err::{self},
};

/// The phases of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Propagation of assignments not yet propagated.
    Propagating,

    /// A conflict was found with the clause.
    Conflict(ClauseKey),

    /// A clause was learned, and is to be asserted.
    Backtracking(AssertingClause),

    /// Propagation was exhausted, and a decision is to be made.
    Deciding,

    /// The formula is satisfiable on the current valuation.
    Satisfiable,

    /// The formula is unsatisfiable, and the proof derives the empty clause.
    Unsatisfiable,

    /// The solve was stopped.
    Aborted,
}

impl Phase {
    /// True if no transition is made from the phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Satisfiable | Self::Unsatisfiable | Self::Aborted)
    }
}

impl Context {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// An error is returned if the context has already been solved, or if some internal invariant is broken during the solve.
    ///
    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Outcome, err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            ContextState::Solving => return Err(err::StateError::SolveInProgress.into()),
            _ => return Err(err::StateError::SolveComplete.into()),
        }
        self.state = ContextState::Solving;

        let total_time = std::time::Instant::now();

        let mut phase = match self.initial_conflict {
            Some(key) => Phase::Conflict(key),
            None => Phase::Propagating,
        };

        while !phase.is_terminal() {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();
            phase = self.step(phase)?;
        }
        self.counters.time = total_time.elapsed();

        let outcome = match phase {
            Phase::Satisfiable => {
                self.state = ContextState::Satisfiable;
                Outcome::Satisfiable(self.model())
            }
            Phase::Unsatisfiable => {
                self.state = ContextState::Unsatisfiable;
                Outcome::Unsatisfiable(self.proof.clone())
            }
            _ => {
                self.state = ContextState::Aborted;
                Outcome::Aborted
            }
        };

        log::info!(target: targets::SOLVE, "{} after {} conflicts and {} decisions", self.report(), self.counters.total_conflicts, self.counters.total_decisions);
        Ok(outcome)
    }

    /// Makes the transition from `phase`, returning the next phase.
    ///
    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn step(&mut self, phase: Phase) -> Result<Phase, err::ErrorKind> {
        match phase {
            Phase::Propagating => match self.propagate() {
                Ok(()) => Ok(Phase::Deciding),
                Err(err::BCPError::Conflict(key)) => Ok(Phase::Conflict(key)),
                Err(e) => Err(e.into()),
            },

            Phase::Conflict(key) => {
                self.counters.total_conflicts += 1;
                self.counters.fresh_conflicts += 1;

                match self.trail.level() {
                    0 => {
                        self.refute(key)?;
                        Ok(Phase::Unsatisfiable)
                    }
                    _ => Ok(Phase::Backtracking(self.conflict_analysis(key)?)),
                }
            }

            Phase::Backtracking(asserting) => {
                self.assert_learned(asserting)?;
                Ok(Phase::Propagating)
            }

            Phase::Deciding => {
                if self.cancel_requested() {
                    log::info!(target: targets::SOLVE, "Solve cancelled");
                    return Ok(Phase::Aborted);
                }
                if self
                    .config
                    .time_limit
                    .value
                    .is_some_and(|limit| self.counters.time >= limit)
                {
                    log::info!(target: targets::SOLVE, "Time limit reached");
                    return Ok(Phase::Aborted);
                }

                if self.restart_due() {
                    self.restart();
                    return Ok(Phase::Propagating);
                }

                match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.counters.total_decisions += 1;
                        self.trail.open_level();
                        self.record_assignment(decision, AssignmentSource::Decision);
                        Ok(Phase::Propagating)
                    }
                    DecisionOk::Exhausted => Ok(Phase::Satisfiable),
                }
            }

            terminal => Ok(terminal),
        }
    }

    /// Backjumps to the assertion level of `asserting`, stores the clause, and asserts the literal of the clause.
    /// Then, learned clauses may be removed, and activity decays.
    fn assert_learned(&mut self, asserting: AssertingClause) -> Result<(), err::ErrorKind> {
        let literal = asserting.asserted().ok_or(err::AnalysisError::NoAssertion)?;
        self.backjump(asserting.level);

        let unit = asserting.clause.len() == 1;
        let key = self
            .clause_db
            .store(asserting.clause, asserting.premise, &mut self.watch_db);
        self.counters.learned += 1;

        let source = match unit {
            true => AssignmentSource::Unit(key),
            false => AssignmentSource::BCP(key),
        };
        self.record_assignment(literal, source);
        self.clause_db.bump_activity(key);

        if self.config.subsumption.value {
            self.subsume_learned(key)?;
        }
        if self.config.forgetting.value {
            self.forget_learned()?;
        }

        if self.counters.total_conflicts % self.config.atom_db.decay_interval.value as usize == 0 {
            self.atom_db.decay_activity();
        }
        self.clause_db.decay_activity();

        Ok(())
    }

    /// True if restarts are enabled and enough conflicts have been seen since the last restart.
    fn restart_due(&self) -> bool {
        self.config.restart.value
            && self.trail.decision_is_made()
            && self.counters.fresh_conflicts
                >= self
                    .config
                    .luby_u
                    .value
                    .saturating_mul(self.counters.luby.current())
    }

    /// Backjumps to level zero, and advances the luby sequence.
    fn restart(&mut self) {
        log::debug!(target: targets::SOLVE, "Restart after {} conflicts", self.counters.fresh_conflicts);
        self.backjump(0);
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;
        self.counters.luby.next();
    }

    /// The current valuation, as a model.
    ///
    /// Any atom without a value is valued true, though on a complete solve every atom has a value.
    fn model(&self) -> Model {
        let values = (1..=self.atom_db.count())
            .map(|atom: Atom| self.atom_db.value_of(atom).unwrap_or(true))
            .collect();
        Model::from_values(values)
    }
}
