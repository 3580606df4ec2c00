/*!
Selection of learned clauses to forget.

When the count of learned clauses passes the configured ceiling, some learned clauses are forgotten, according to the configured [Retention] policy:
- [Retention::ActivityHalf] keeps the half of learned clauses with the highest activity, with ties kept in favour of the more recent clause.
- [Retention::RecentWindow] keeps the most recently learned clauses, up to the size of the window.

A clause which is *locked* (the antecedent of some assignment on the trail) is always kept.
Whether a clause is locked depends on the trail, and so is determined by the caller.
*/

use crate::{config::Retention, db::keys::ClauseKey};

use super::{ClauseDB, DBClause};

impl ClauseDB {
    /// True if the count of learned clauses exceeds the ceiling.
    pub fn over_ceiling(&self) -> bool {
        self.learned.len() > self.config.ceiling.value
    }

    /// Keys to learned clauses to forget, in the order learned, skipping any clause for which `is_locked` holds.
    pub fn forgetting_candidates(&self, is_locked: impl Fn(&DBClause) -> bool) -> Vec<ClauseKey> {
        let keep = match self.config.retention.value {
            Retention::ActivityHalf => self.learned.len().div_ceil(2),
            Retention::RecentWindow => self.config.window.value,
        };

        // Positions of learned clauses, most valuable first.
        let mut ranked: Vec<usize> = (0..self.learned.len()).rev().collect();
        if self.config.retention.value == Retention::ActivityHalf {
            let activity = |position: &usize| {
                self.clauses
                    .get(self.learned[*position])
                    .map(|clause| clause.activity)
                    .unwrap_or_default()
            };
            ranked.sort_by(|a, b| activity(b).total_cmp(&activity(a)));
        }

        let mut forget: Vec<usize> = ranked
            .into_iter()
            .skip(keep)
            .filter(|position| match self.clauses.get(self.learned[*position]) {
                Some(clause) => !is_locked(clause),
                None => false,
            })
            .collect();
        forget.sort_unstable();

        forget
            .into_iter()
            .map(|position| self.learned[position])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, Retention},
        db::{clause::ClauseDB, keys::ClauseKey, watches::WatchDB},
        proof::Premise,
    };

    fn learned_dbs(count: usize, retention: Retention) -> (ClauseDB, Vec<ClauseKey>) {
        let mut watch_db = WatchDB::default();
        for _ in 0..count + 1 {
            watch_db.fresh_atom();
        }
        let mut config = Config::default();
        config.clause_db.retention.value = retention;
        config.clause_db.window.value = 2;
        config.clause_db.ceiling.value = 3;

        let mut clause_db = ClauseDB::new(&config);
        let keys = (0..count)
            .map(|step| {
                let atom = step as i32 + 1;
                clause_db.store(vec![atom, atom + 1], Premise::Step(step), &mut watch_db)
            })
            .collect();
        (clause_db, keys)
    }

    #[test]
    fn activity_half() {
        let (mut clause_db, keys) = learned_dbs(4, Retention::ActivityHalf);
        assert!(clause_db.over_ceiling());

        clause_db.bump_activity(keys[0]);
        clause_db.bump_activity(keys[2]);

        let forget = clause_db.forgetting_candidates(|_| false);
        assert_eq!(forget, vec![keys[1], keys[3]]);
    }

    #[test]
    fn recent_window_skips_locked() {
        let (clause_db, keys) = learned_dbs(5, Retention::RecentWindow);

        let locked = keys[1];
        let forget = clause_db.forgetting_candidates(|clause| clause.key() == locked);
        assert_eq!(forget, vec![keys[0], keys[2]]);
    }
}
