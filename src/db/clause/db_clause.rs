/*!
A clause, as stored in the [clause database](crate::db::clause).

A [DBClause] wraps a clause with:
- The key to the clause.
- The [premise](crate::proof::Premise) the clause is cited as in a proof, which also distinguishes original clauses from learned clauses.
- An activity, for learned clauses.

# Watched literals

If a clause has two or more literals, the literals at index `0` and index `1` are watched.
And, when a watched literal becomes false, [update_watch](DBClause::update_watch) reorders the clause to maintain this, placing the false literal at index `1` and searching for a replacement.

If the clause asserts some literal, the asserted literal is at index `0`, and this remains the case while the assertion is on the trail, as the clause is not revisited until the asserted literal is unassigned.
*/

use crate::{
    config::Activity,
    db::keys::ClauseKey,
    proof::Premise,
    structures::{
        clause::CClause,
        literal::CLiteral,
        valuation::{LiteralStatus, Valuation},
    },
    types::err::{self},
};

/// A clause in the clause database.
#[derive(Clone, Debug)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
    premise: Premise,
    pub activity: Activity,
}

/// The result of updating the watch of a clause after a watched literal became false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchUpdate {
    /// The other watched literal is true, so the watch is kept.
    Witness,

    /// The watch moved to the literal.
    Moved(CLiteral),

    /// No other literal is unassigned or true, and the other watched literal is unassigned, so the clause asserts it.
    Asserts(CLiteral),

    /// Every literal of the clause is false.
    Conflict,
}

impl DBClause {
    pub fn new(key: ClauseKey, clause: CClause, premise: Premise) -> Self {
        DBClause {
            key,
            clause,
            premise,
            activity: Activity::default(),
        }
    }

    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The premise to cite when resolving on the clause.
    pub fn premise(&self) -> Premise {
        self.premise
    }

    /// True if the clause was learned, rather than given as part of the formula.
    pub fn is_learned(&self) -> bool {
        matches!(self.premise, Premise::Step(_))
    }

    /// The watched literals of the clause, if the clause has two or more literals.
    pub fn watched(&self) -> Option<(CLiteral, CLiteral)> {
        match self.clause.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Updates the watches of the clause, given the watched literal `false_literal` is false on `valuation`.
    ///
    /// On return, `false_literal` is at index `1` of the clause, unless the watch moved, in which case the new watch is at index `1`.
    /// In either case, the other watch is at index `0`.
    pub fn update_watch(
        &mut self,
        false_literal: CLiteral,
        valuation: &impl Valuation,
    ) -> Result<WatchUpdate, err::BCPError> {
        if self.clause.len() < 2 {
            return Err(err::BCPError::CorruptWatch);
        }
        if self.clause[0] == false_literal {
            self.clause.swap(0, 1);
        }
        if self.clause[1] != false_literal {
            return Err(err::BCPError::CorruptWatch);
        }

        let other = self.clause[0];
        if valuation.literal_status(other) == LiteralStatus::Satisfied {
            return Ok(WatchUpdate::Witness);
        }

        for index in 2..self.clause.len() {
            if valuation.literal_status(self.clause[index]) != LiteralStatus::Falsified {
                self.clause.swap(1, index);
                return Ok(WatchUpdate::Moved(self.clause[1]));
            }
        }

        match valuation.literal_status(other) {
            LiteralStatus::Unassigned => Ok(WatchUpdate::Asserts(other)),
            _ => Ok(WatchUpdate::Conflict),
        }
    }
}

impl AsRef<[CLiteral]> for DBClause {
    fn as_ref(&self) -> &[CLiteral] {
        &self.clause
    }
}

impl std::ops::Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn db_clause(clause: CClause) -> DBClause {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        DBClause::new(keys.insert(()), clause, Premise::Original(0))
    }

    #[test]
    fn watch_moves_to_unassigned() {
        let mut clause = db_clause(vec![1, 2, 3]);
        let valuation = vec![Some(true), Some(false), None, None];

        assert_eq!(clause.update_watch(1, &valuation), Ok(WatchUpdate::Moved(3)));
        assert_eq!(clause.watched(), Some((2, 3)));
    }

    #[test]
    fn witness_and_assertion() {
        let mut clause = db_clause(vec![1, -2, 3]);
        let valuation = vec![Some(true), Some(true), Some(true), None];
        assert_eq!(clause.update_watch(-2, &valuation), Ok(WatchUpdate::Witness));

        let mut clause = db_clause(vec![1, -2, 3]);
        let valuation = vec![Some(true), None, Some(true), Some(false)];
        assert_eq!(clause.update_watch(-2, &valuation), Ok(WatchUpdate::Asserts(1)));
        assert_eq!(clause[0], 1);
    }

    #[test]
    fn conflict_and_corruption() {
        let mut clause = db_clause(vec![1, 2]);
        let valuation = vec![Some(true), Some(false), Some(false)];
        assert_eq!(clause.update_watch(2, &valuation), Ok(WatchUpdate::Conflict));

        let mut clause = db_clause(vec![1, 2, 3]);
        assert_eq!(
            clause.update_watch(3, &valuation),
            Err(err::BCPError::CorruptWatch)
        );
    }
}
