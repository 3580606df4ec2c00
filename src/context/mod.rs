/*!
The context, to which formulas are added and within which a solve takes place.

A [Context] owns every structure used during a solve: the databases, the trail, the proof, and so on.
So, contexts are independent of one another, and any number of contexts may be used at once, e.g. on separate threads.

# Example
```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::reports::{Outcome, Report};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

let outcome = the_context.solve().unwrap();
assert_eq!(the_context.report(), Report::Satisfiable);

match outcome {
    Outcome::Satisfiable(model) => {
        assert_eq!(model.value_of(1), Some(false));
        assert_eq!(model.value_of(2), Some(true));
    }
    _ => panic!("expected a model"),
}
```
*/

mod counters;
pub use counters::Counters;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::Serialize;

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::{ClauseDB, DBClause},
        keys::ClauseKey,
        trail::{Assignment, AssignmentSource, Trail},
        watches::WatchDB,
        LevelIndex,
    },
    proof::Proof,
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve was stopped before the satisfiability of the formula was determined.
    Aborted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Aborted => write!(f, "Aborted"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The watch database.
    pub watch_db: WatchDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The resolution buffer, used during analysis.
    pub resolution_buffer: ResolutionBuffer,

    /// The proof of resolution steps made.
    pub proof: Proof,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// A count of clauses given to the context, each clause being cited in a proof by its position in this count.
    pub(crate) input_count: usize,

    /// The count of atoms declared, if declared.
    pub(crate) declared_atoms: Option<Atom>,

    /// A clause which conflicts with the valuation before any propagation, if one was found while building the context.
    pub(crate) initial_conflict: Option<ClauseKey>,

    /// A flag which, when set, requests the solve stops at the next decision.
    cancel: Option<Arc<AtomicBool>>,
}

impl Context {
    /// A context with the given configuration, and no formula.
    pub fn from_config(config: Config) -> Self {
        Context {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            watch_db: WatchDB::default(),
            trail: Trail::default(),
            resolution_buffer: ResolutionBuffer::default(),
            proof: Proof::default(),
            counters: Counters::default(),
            state: ContextState::Configuration,
            input_count: 0,
            declared_atoms: None,
            initial_conflict: None,
            cancel: None,
            config,
        }
    }

    /// Sets a flag to be checked once per decision.
    /// If the flag is set, the solve stops and returns [Aborted](crate::reports::Outcome::Aborted).
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    /// True if cancellation of the solve has been requested.
    pub fn cancel_requested(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// A fresh atom, with a watch list for each of its literals.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.atom_db.fresh_atom()?;
        self.watch_db.fresh_atom();
        Ok(atom)
    }

    /// Records the assignment of `literal` on the trail and the valuation.
    pub fn record_assignment(&mut self, literal: CLiteral, source: AssignmentSource) {
        let position = self.trail.push(literal, source);
        self.atom_db.set_value(literal, position);
    }

    /// The assignment which valued `atom`, if any.
    pub fn assignment_of(&self, atom: Atom) -> Option<&Assignment> {
        self.atom_db
            .trail_position(atom)
            .and_then(|position| self.trail.get(position))
    }

    /// The decision level at which `atom` was valued, if any.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment_of(atom).map(|assignment| assignment.level)
    }

    /// True if `clause` is the antecedent of some assignment on the trail.
    ///
    /// A clause which is the antecedent of an assignment asserts its first literal, and so only the assignment of the first literal is examined.
    pub fn is_locked(&self, clause: &DBClause) -> bool {
        match clause.first() {
            Some(literal) => self
                .assignment_of(literal.atom())
                .is_some_and(|assignment| assignment.source.antecedent() == Some(clause.key())),
            None => false,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
