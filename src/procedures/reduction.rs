/*!
Removal of learned clauses from the clause database.

# Subsumption

After a clause is learned, every other learned clause whose literals include each literal of the fresh clause is removed.
This is *backward* subsumption: the fresh clause is used to remove older clauses, while the fresh clause is never itself checked against older clauses.

# Forgetting

After a clause is learned, if the count of learned clauses passes the configured ceiling, learned clauses are forgotten according to the configured [retention](crate::config::Retention) policy.

# Soundness

Any learned clause is a consequence of the original clauses, and so removing a learned clause never changes whether the formula is satisfiable.
Still, a *locked* clause, one which is the antecedent of some assignment on the trail, is never removed, as the clause may be required for analysis.
And, original clauses are never removed.
*/

use crate::{
    context::Context,
    db::keys::ClauseKey,
    misc::log::targets::{self},
    types::err::{self},
};

impl Context {
    /// Removes each unlocked learned clause subsumed by the clause `key`.
    ///
    /// For documentation see [procedures::reduction](crate::procedures::reduction).
    pub fn subsume_learned(&mut self, key: ClauseKey) -> Result<(), err::ErrorKind> {
        let subsumed = {
            let clause = self.clause_db.get(key)?;
            self.clause_db.subsumed_learned(clause, key)
        };

        for subsumed_key in subsumed {
            if self.is_locked(self.clause_db.get(subsumed_key)?) {
                continue;
            }
            log::debug!(target: targets::SUBSUMPTION, "{key} subsumes {subsumed_key}");
            self.remove_unlocked(subsumed_key)?;
            self.counters.subsumed += 1;
        }

        Ok(())
    }

    /// Forgets learned clauses, if the count of learned clauses passes the ceiling.
    ///
    /// For documentation see [procedures::reduction](crate::procedures::reduction).
    pub fn forget_learned(&mut self) -> Result<(), err::ErrorKind> {
        if !self.clause_db.over_ceiling() {
            return Ok(());
        }

        let forget = self
            .clause_db
            .forgetting_candidates(|clause| self.is_locked(clause));
        log::debug!(target: targets::REDUCTION, "Forgetting {} of {} learned clauses", forget.len(), self.clause_db.learned_count());

        for key in forget {
            self.remove_unlocked(key)?;
            self.counters.forgotten += 1;
        }

        Ok(())
    }

    /// Removes the learned clause `key`, unless the clause is locked.
    fn remove_unlocked(&mut self, key: ClauseKey) -> Result<(), err::ErrorKind> {
        if self.is_locked(self.clause_db.get(key)?) {
            log::error!(target: targets::REDUCTION, "Attempt to remove locked clause {key}");
            return Err(err::ClauseDBError::LockedRemoval.into());
        }
        self.clause_db.remove_learned(key, &mut self.watch_db)?;
        Ok(())
    }
}
