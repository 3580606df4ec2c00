/*!
Tools for building a context.

# Basic methods

A formula is added to a context clause by clause, with [add_clause](Context::add_clause).
Clauses are given as sequences of integers, as in the DIMACS format: the magnitude of an integer is an atom and the sign its polarity.

- Atoms are created on demand, so every atom up to the largest atom in a clause is part of the context.
- Alternatively, a count of atoms may be [declared](Context::declare_atoms), and then any literal whose atom exceeds the count is malformed.

On input, duplicate literals are removed from a clause, and tautologies are skipped.
Each clause given, including skipped tautologies, has an index given by the order of input, and an index is how a clause is cited in a [proof](crate::proof).

Clauses may only be added before a solve.

# Examples

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::builder::ClauseOk;
# use cdcl_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(matches!(the_context.add_clause(vec![1, -2]), Ok(ClauseOk::Added(_))));
assert_eq!(the_context.add_clause(vec![2, -2]), Ok(ClauseOk::Tautology));
assert!(the_context.add_clause(vec![0, 1]).is_err());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
```

Or, with the free functions [load] and [load_with]:

```rust
# use cdcl_sat::builder::{load, load_with};
# use cdcl_sat::config::Config;
let the_context = load(vec![vec![1, 2], vec![-1, 3]]);
assert!(the_context.is_ok());

let out_of_range = load_with(Config::default(), Some(2), vec![vec![1, 2], vec![-1, 3]]);
assert!(out_of_range.is_err());
```
*/

pub mod dimacs;
pub mod pigeonhole;

use crate::{
    config::Config,
    context::{Context, ContextState},
    db::{keys::ClauseKey, trail::AssignmentSource},
    misc::log::targets::{self},
    proof::Premise,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{deduplicate, CClause, Clause},
        literal::{IntLiteral, Literal},
        valuation::LiteralStatus,
    },
    types::err::{self},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context, with the given key.
    Added(ClauseKey),

    /// The clause was a tautology, and so was not added to the context.
    Tautology,
}

impl Context {
    /// Declares the count of atoms in the formula.
    ///
    /// All atoms up to `count` are added to the context, and any later clause containing an atom greater than `count` is [malformed](err::MalformedClauseError::AtomOutOfRange).
    pub fn declare_atoms(&mut self, count: Atom) -> Result<(), err::ErrorKind> {
        self.check_input_state()?;
        if count > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted.into());
        }
        self.ensure_atom(count)?;
        self.declared_atoms = Some(count);
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// A malformed clause is not added, though it still has an index.
    pub fn add_clause(&mut self, clause: impl AsRef<[IntLiteral]>) -> Result<ClauseOk, err::ErrorKind> {
        self.check_input_state()?;

        let index = self.input_count;
        self.input_count += 1;

        let mut clause: CClause = clause.as_ref().to_vec();

        let mut max_atom = 0;
        for literal in &clause {
            let atom = literal.atom();
            if atom == 0 {
                return Err(err::MalformedClauseError::ZeroLiteral { clause: index }.into());
            }
            if atom > ATOM_MAX {
                return Err(err::AtomDBError::AtomsExhausted.into());
            }
            if let Some(limit) = self.declared_atoms {
                if atom > limit {
                    return Err(err::MalformedClauseError::AtomOutOfRange {
                        clause: index,
                        literal: *literal,
                        limit,
                    }
                    .into());
                }
            }
            max_atom = std::cmp::max(max_atom, atom);
        }
        self.ensure_atom(max_atom)?;

        deduplicate(&mut clause);
        if clause.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology {}", clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        let unit = match clause.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        };
        let empty = clause.is_empty();

        let key = self
            .clause_db
            .store(clause, Premise::Original(index), &mut self.watch_db);

        if empty {
            log::info!(target: targets::CLAUSE_DB, "Input clause {index} is empty");
            self.initial_conflict.get_or_insert(key);
        } else if let Some(literal) = unit {
            match self.atom_db.literal_status(literal) {
                LiteralStatus::Unassigned => {
                    self.record_assignment(literal, AssignmentSource::Unit(key));
                }
                LiteralStatus::Satisfied => {}
                LiteralStatus::Falsified => {
                    log::info!(target: targets::CLAUSE_DB, "Input unit {literal} conflicts with an earlier unit");
                    self.initial_conflict.get_or_insert(key);
                }
            }
        }

        Ok(ClauseOk::Added(key))
    }

    /// Adds each clause of `clauses` to the context, in order, stopping at the first error.
    pub fn add_clauses<C: AsRef<[IntLiteral]>>(
        &mut self,
        clauses: impl IntoIterator<Item = C>,
    ) -> Result<(), err::ErrorKind> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Ensures every atom up to `atom` is part of the context.
    fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::ErrorKind> {
        while self.atom_db.count() < atom {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// An error, unless the context accepts input.
    /// On success the context is in the input state.
    fn check_input_state(&mut self) -> Result<(), err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
                Ok(())
            }
            ContextState::Solving => Err(err::StateError::SolveInProgress.into()),
            ContextState::Satisfiable | ContextState::Unsatisfiable | ContextState::Aborted => {
                Err(err::StateError::SolveComplete.into())
            }
        }
    }
}

/// A context with the default configuration containing `clauses`.
///
/// The count of atoms is the largest atom of any clause.
pub fn load<C: AsRef<[IntLiteral]>>(
    clauses: impl IntoIterator<Item = C>,
) -> Result<Context, err::ErrorKind> {
    load_with(Config::default(), None, clauses)
}

/// A context with configuration `config` containing `clauses`.
///
/// If `atom_count` is some count, any clause containing an atom greater than the count is malformed.
pub fn load_with<C: AsRef<[IntLiteral]>>(
    config: Config,
    atom_count: Option<Atom>,
    clauses: impl IntoIterator<Item = C>,
) -> Result<Context, err::ErrorKind> {
    let mut the_context = Context::from_config(config);
    if let Some(count) = atom_count {
        the_context.declare_atoms(count)?;
    }
    the_context.add_clauses(clauses)?;
    log::info!(target: targets::CLAUSE_DB, "Loaded {} clauses over {} atoms", the_context.clause_db.original_count(), the_context.atom_db.count());
    Ok(the_context)
}
