/*!
A database of clause related things.

The clause database is an arena of [DBClause]s, addressed by [ClauseKey]s.
Keys are stable, and a key is never reused, so a key held by the [trail](crate::db::trail) or a [watch list](crate::db::watches) either refers to the clause it was issued for or to nothing.

Clauses are stored through [store](ClauseDB::store), which also notes the watches of the clause in the [watch database](crate::db::watches).
Learned clauses may be removed through [remove_learned](ClauseDB::remove_learned), which eagerly removes the watches of the clause.
Original clauses are never removed.

In addition, the database tracks:
- The order in which clauses were learned, for forgetting by recency.
- The activity of each learned clause, for forgetting by activity.
*/

mod db_clause;
pub use db_clause::{DBClause, WatchUpdate};

mod reduction;
mod subsumption;

use slotmap::SlotMap;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config},
    db::{keys::ClauseKey, watches::WatchDB},
    misc::log::targets::{self},
    proof::Premise,
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// The clause database.
#[derive(Clone, Debug)]
pub struct ClauseDB {
    /// Every clause, original or learned.
    clauses: SlotMap<ClauseKey, DBClause>,

    /// Keys to learned clauses, in the order learned.
    learned: Vec<ClauseKey>,

    /// A count of original clauses.
    original_count: usize,

    /// A local configuration, derived from the configuration of a context.
    pub config: ClauseDBConfig,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            clauses: SlotMap::with_key(),
            learned: Vec::default(),
            original_count: 0,
            config: config.clause_db.clone(),
        }
    }

    /// Stores `clause`, citable in a proof as `premise`, and returns the key to the clause.
    ///
    /// If the clause contains two or more literals, the first two literals are watched.
    pub fn store(&mut self, clause: CClause, premise: Premise, watch_db: &mut WatchDB) -> ClauseKey {
        let key = self
            .clauses
            .insert_with_key(|key| DBClause::new(key, clause, premise));

        // The key was issued immediately above.
        let stored = &self.clauses[key];
        if let Some((a, b)) = stored.watched() {
            watch_db.watch(a, key);
            watch_db.watch(b, key);
        }

        match premise {
            Premise::Original(_) => self.original_count += 1,
            Premise::Step(_) => self.learned.push(key),
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored {key}: {}", stored.as_dimacs(false));
        key
    }

    /// Removes the learned clause `key` from the database, and from the watch lists of the watched literals of the clause.
    pub fn remove_learned(
        &mut self,
        key: ClauseKey,
        watch_db: &mut WatchDB,
    ) -> Result<DBClause, err::ErrorKind> {
        match self.clauses.get(key) {
            None => return Err(err::ClauseDBError::Missing.into()),
            Some(stored) if !stored.is_learned() => {
                log::error!(target: targets::CLAUSE_DB, "Attempt to remove original clause {key}");
                return Err(err::ClauseDBError::OriginalRemoval.into());
            }
            Some(_) => {}
        }

        let removed = self.clauses.remove(key).ok_or(err::ClauseDBError::Missing)?;
        if let Some((a, b)) = removed.watched() {
            watch_db.unwatch(a, key)?;
            watch_db.unwatch(b, key)?;
        }
        self.learned.retain(|learned| *learned != key);

        log::trace!(target: targets::CLAUSE_DB, "Removed {key}: {}", removed.as_dimacs(false));
        Ok(removed)
    }

    /// The clause `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        self.clauses.get(key).ok_or(err::ClauseDBError::Missing)
    }

    /// The clause `key`, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        self.clauses.get_mut(key).ok_or(err::ClauseDBError::Missing)
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of learned clauses currently in the database.
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    /// Keys to learned clauses currently in the database, in the order learned.
    pub fn learned_keys(&self) -> &[ClauseKey] {
        &self.learned
    }

    /// An iterator over all clauses in the database.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.values()
    }

    /// Bumps the activity of the clause `key`, rescaling all activities if needed.
    pub fn bump_activity(&mut self, key: ClauseKey) {
        let bump = self.config.bump.value;
        let Some(clause) = self.clauses.get(key) else {
            return;
        };

        if clause.activity + bump > self.config.bump.max {
            let max = self
                .clauses
                .values()
                .fold(bump, |max, clause| Activity::max(max, clause.activity));
            let factor = 1.0 / max;
            for clause in self.clauses.values_mut() {
                clause.activity *= factor;
            }
            self.config.bump.value *= factor;
        }

        if let Some(clause) = self.clauses.get_mut(key) {
            clause.activity += self.config.bump.value;
        }
    }

    /// Decays the activity of every clause, relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.config.bump.value *= 1.0 / self.config.decay.value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_dbs(atoms: usize) -> (ClauseDB, WatchDB) {
        let mut watch_db = WatchDB::default();
        for _ in 0..atoms {
            watch_db.fresh_atom();
        }
        (ClauseDB::new(&Config::default()), watch_db)
    }

    #[test]
    fn store_watches_first_two_literals() {
        let (mut clause_db, mut watch_db) = fresh_dbs(3);

        let long = clause_db.store(vec![1, -2, 3], Premise::Original(0), &mut watch_db);
        let unit = clause_db.store(vec![2], Premise::Original(1), &mut watch_db);

        assert_eq!(watch_db.watchers(1), &[long]);
        assert_eq!(watch_db.watchers(-2), &[long]);
        assert!(watch_db.watchers(3).is_empty());
        assert!(watch_db.watchers(2).is_empty());

        assert_eq!(clause_db.original_count(), 2);
        assert_eq!(clause_db.learned_count(), 0);
        assert!(clause_db.get(unit).is_ok());
    }

    #[test]
    fn remove_learned_purges_watches() {
        let (mut clause_db, mut watch_db) = fresh_dbs(3);

        let original = clause_db.store(vec![1, 2], Premise::Original(0), &mut watch_db);
        let learned = clause_db.store(vec![1, 3], Premise::Step(0), &mut watch_db);
        assert_eq!(clause_db.learned_keys(), &[learned]);

        assert!(clause_db.remove_learned(learned, &mut watch_db).is_ok());
        assert_eq!(watch_db.watchers(1), &[original]);
        assert!(watch_db.watchers(3).is_empty());
        assert_eq!(clause_db.learned_count(), 0);
        assert_eq!(
            clause_db.get(learned).map(|clause| clause.key()),
            Err(err::ClauseDBError::Missing)
        );

        assert_eq!(
            clause_db.remove_learned(original, &mut watch_db).map(|c| c.key()),
            Err(err::ErrorKind::ClauseDB(err::ClauseDBError::OriginalRemoval))
        );
        assert_eq!(
            clause_db.remove_learned(learned, &mut watch_db).map(|c| c.key()),
            Err(err::ErrorKind::ClauseDB(err::ClauseDBError::Missing))
        );
    }

    #[test]
    fn activity_bumps_and_rescales() {
        let (mut clause_db, mut watch_db) = fresh_dbs(2);
        clause_db.config.bump.max = 4.0;

        let a = clause_db.store(vec![1, 2], Premise::Step(0), &mut watch_db);
        let b = clause_db.store(vec![-1, 2], Premise::Step(1), &mut watch_db);

        for _ in 0..6 {
            clause_db.bump_activity(a);
            clause_db.decay_activity();
        }
        clause_db.bump_activity(b);

        let activity_a = clause_db.get(a).unwrap().activity;
        let activity_b = clause_db.get(b).unwrap().activity;
        assert!(activity_a <= 4.0);
        assert!(activity_a > activity_b);
    }
}
