/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, or, at level zero, derives the empty clause.

For details on resolution, see the [resolution buffer](crate::resolution_buffer).

# Conflict analysis

For the method, see [conflict_analysis](Context::conflict_analysis).

Starting from the conflict clause, the trail of the current level is walked backwards.
For each assignment whose negation is in the working clause, the working clause is resolved with the antecedent of the assignment.
The walk stops when the working clause contains exactly one literal from the current level, the first unique implication point.
As the walk is in trail order, the literal resolved on is always the most recently assigned literal of the current level in the working clause.

Literals of the working clause valued at level zero are then resolved away, using the antecedents of the level zero assignments, again in reverse trail order.
So, a learned clause never contains a literal which is false at level zero, and each literal dropped is justified by some step of the proof.

The literals of the learned clause are ordered so the asserted literal is first, followed by a literal of the [assertion level](Context::assertion_level).
This places the watches of the clause on the asserted literal and the last literal to be unassigned by a backjump.

# Refutation

For the method, see [refute](Context::refute).

A conflict at level zero is resolved with the antecedents of level zero assignments until the empty clause is derived.
As every assignment at level zero has an antecedent, this always succeeds.

# Example

```rust,ignore
match self.trail.level() {
    0 => {
        self.refute(key)?;
        Phase::Unsatisfiable
    }
    _ => Phase::Backtracking(self.conflict_analysis(key)?),
}
```
*/

use crate::{
    config::vsids::VSIDS,
    context::Context,
    db::{keys::ClauseKey, LevelIndex},
    misc::log::targets::{self},
    proof::{Premise, ProofStep},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A clause learned by analysis, which asserts its first literal at the assertion level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertingClause {
    /// The clause, with the asserted literal first.
    pub clause: CClause,

    /// The step of the proof which derived the clause.
    pub premise: Premise,

    /// The level to backjump to before asserting.
    pub level: LevelIndex,
}

impl AssertingClause {
    /// The literal asserted by the clause.
    pub fn asserted(&self) -> Option<CLiteral> {
        self.clause.first().copied()
    }
}

impl Context {
    /// Derives an asserting clause from the conflict clause `key`, at a level above zero.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<AssertingClause, err::ErrorKind> {
        let level = self.trail.level();
        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {level}");

        let conflict = self.clause_db.get(key)?;
        self.resolution_buffer.load(conflict, conflict.premise());
        self.clause_db.bump_activity(key);

        let mut level_count = self
            .resolution_buffer
            .literals()
            .iter()
            .filter(|literal| self.level_of(literal.atom()) == Some(level))
            .count();

        let mut resolved = false;
        let level_start = self.trail.level_start(level);

        for position in (level_start..self.trail.len()).rev() {
            if level_count <= 1 {
                break;
            }

            let Some(assignment) = self.trail.get(position).copied() else {
                break;
            };
            let pivot = assignment.literal.negate();
            if !self.resolution_buffer.contains(pivot) {
                continue;
            }

            let antecedent = match assignment.source.antecedent() {
                Some(antecedent) => antecedent,
                None => {
                    log::error!(target: targets::ANALYSIS, "Resolution reached the decision {} with {level_count} literals at level {level}", assignment.literal);
                    return Err(err::AnalysisError::MissingAntecedent.into());
                }
            };

            let reason = self.clause_db.get(antecedent)?;
            let fresh = self.resolution_buffer.resolve(
                pivot,
                reason,
                reason.premise(),
                &mut self.proof,
            )?;
            self.clause_db.bump_activity(antecedent);
            resolved = true;

            level_count -= 1;
            level_count += fresh
                .iter()
                .filter(|literal| self.level_of(literal.atom()) == Some(level))
                .count();
        }

        if level_count != 1 {
            log::error!(target: targets::ANALYSIS, "Analysis of {key} ended with {level_count} literals at level {level}");
            return Err(err::AnalysisError::NoAssertion.into());
        }

        resolved |= self.resolve_top_level()?;

        let premise = match resolved {
            true => self
                .resolution_buffer
                .premise()
                .ok_or(err::AnalysisError::NoAssertion)?,
            false => {
                // The conflict clause was asserting at some lower level.
                log::warn!(target: targets::ANALYSIS, "Conflict clause {key} was already asserting");
                self.resolution_buffer.restate(&mut self.proof)?
            }
        };

        let mut clause = self.resolution_buffer.literals().to_vec();
        self.order_asserting(&mut clause, level)?;
        let assertion_level = self.assertion_level(&clause)?;

        match self.config.vsids_variant.value {
            VSIDS::Chaff => self.atom_db.bump_activity(clause.atoms()),
            VSIDS::MiniSAT => self
                .atom_db
                .bump_activity(self.resolution_buffer.atoms_used().iter().copied()),
        }

        log::trace!(target: targets::ANALYSIS, "Learned {} asserting at level {assertion_level}", clause.as_dimacs(false));

        Ok(AssertingClause {
            clause,
            premise,
            level: assertion_level,
        })
    }

    /// Derives the empty clause from the conflict clause `key`, at level zero.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn refute(&mut self, key: ClauseKey) -> Result<(), err::ErrorKind> {
        log::trace!(target: targets::ANALYSIS, "Refutation from {key}");

        let conflict = self.clause_db.get(key)?;
        if conflict.is_empty() {
            self.proof.record(ProofStep {
                clause: CClause::default(),
                pivot: None,
                premises: vec![conflict.premise()],
            });
            return Ok(());
        }

        self.resolution_buffer.load(conflict, conflict.premise());
        self.resolve_top_level()?;

        match self.resolution_buffer.literals().is_empty() {
            true => Ok(()),
            false => {
                log::error!(target: targets::ANALYSIS, "Refutation from {key} ended with {}", self.resolution_buffer.literals().as_dimacs(false));
                Err(err::AnalysisError::IncompleteRefutation.into())
            }
        }
    }

    /// Resolves away each literal of the resolution buffer which is false at level zero.
    ///
    /// Returns true if some resolution took place.
    fn resolve_top_level(&mut self) -> Result<bool, err::ErrorKind> {
        let mut resolved = false;

        for position in (0..self.trail.level_start(1)).rev() {
            let Some(assignment) = self.trail.get(position).copied() else {
                break;
            };
            let pivot = assignment.literal.negate();
            if !self.resolution_buffer.contains(pivot) {
                continue;
            }

            let antecedent = assignment
                .source
                .antecedent()
                .ok_or(err::AnalysisError::MissingAntecedent)?;

            let reason = self.clause_db.get(antecedent)?;
            self.resolution_buffer
                .resolve(pivot, reason, reason.premise(), &mut self.proof)?;
            resolved = true;
        }

        Ok(resolved)
    }

    /// Orders `clause` so the only literal of `level` is first and some literal of the highest remaining level is second.
    fn order_asserting(&self, clause: &mut CClause, level: LevelIndex) -> Result<(), err::ErrorKind> {
        let asserted = clause
            .iter()
            .position(|literal| self.level_of(literal.atom()) == Some(level))
            .ok_or(err::AnalysisError::NoAssertion)?;
        clause.swap(0, asserted);

        let mut highest: Option<(usize, LevelIndex)> = None;
        for (index, literal) in clause.iter().enumerate().skip(1) {
            let literal_level = self
                .level_of(literal.atom())
                .ok_or(err::AnalysisError::NoAssertion)?;
            if highest.map_or(true, |(_, highest_level)| literal_level > highest_level) {
                highest = Some((index, literal_level));
            }
        }
        if let Some((index, _)) = highest {
            clause.swap(1, index);
        }

        Ok(())
    }
}
