/*!
Backward subsumption of learned clauses.

A clause C *subsumes* a clause L if every literal of C is a literal of L.
In this case, any valuation which satisfies C satisfies L, and so L is redundant in the presence of C.

After a clause is learned, the database is searched for learned clauses subsumed by the fresh clause.
Original clauses are never candidates, as original clauses are never removed.
*/

use crate::{
    db::keys::ClauseKey,
    structures::{clause::Clause, literal::CLiteral},
};

use super::ClauseDB;

impl ClauseDB {
    /// Keys to learned clauses, other than `exclude`, subsumed by `clause`, in the order learned.
    pub fn subsumed_learned(&self, clause: &[CLiteral], exclude: ClauseKey) -> Vec<ClauseKey> {
        self.learned
            .iter()
            .filter(|key| **key != exclude)
            .filter(|key| match self.clauses.get(**key) {
                Some(candidate) => {
                    candidate.size() >= clause.len()
                        && clause.iter().all(|literal| candidate.contains(literal))
                }
                None => false,
            })
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        db::{clause::ClauseDB, watches::WatchDB},
        proof::Premise,
    };

    #[test]
    fn supersets_are_subsumed() {
        let mut watch_db = WatchDB::default();
        for _ in 0..4 {
            watch_db.fresh_atom();
        }
        let mut clause_db = ClauseDB::new(&Config::default());

        let original = clause_db.store(vec![1, 2, 3], Premise::Original(0), &mut watch_db);
        let superset = clause_db.store(vec![3, 1, -4, 2], Premise::Step(0), &mut watch_db);
        let unrelated = clause_db.store(vec![1, -2, 3], Premise::Step(1), &mut watch_db);
        let fresh = clause_db.store(vec![2, 1], Premise::Step(2), &mut watch_db);

        let subsumed = clause_db.subsumed_learned(&[2, 1], fresh);
        assert_eq!(subsumed, vec![superset]);
        assert!(!subsumed.contains(&original));
        assert!(!subsumed.contains(&unrelated));
    }
}
