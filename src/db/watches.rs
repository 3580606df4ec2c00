/*!
A structure to record which clauses are watching a literal.

# Theory

A core part of a solve is [Boolean Constraint Propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

For example, given the clause p ∨ -q ∨ r and a valuation v such that p is false and q is true, the clause is true on the valuation *only if* r is (made) true. In other terms, the clause 'asserts' r.

Note, BCP only applies when:
- There is exactly one literal without a value.
- All other literals conflict with the valuation.

So, so long as two literals of a clause are not false, the clause cannot assert anything, and it is enough to watch two such literals.
When a watched literal becomes false, the clause is inspected, and either some other literal is watched, or the clause asserts the other watched literal, or the clause conflicts with the valuation.

# Implementation

Each literal has a watch list, indexed by the [index](crate::structures::literal::Literal::index) of the literal, containing the keys of clauses watching the literal.
The watched literals of a clause are the literals at index `0` and index `1` of the clause, and so a clause of length two or more is in exactly two watch lists.

Unit clauses and the empty clause watch nothing.

Removal of a clause from the [clause database](crate::db::clause) eagerly removes the key of the clause from both watch lists.
As a consequence, every key in a watch list is a key to a live clause.

# Literature

The given implementation follows [Chaff](https://dl.acm.org/doi/10.1145/378239.379017) and [MiniSAT](https://link.springer.com/chapter/10.1007/978-3-540-24605-3_37), where the watched literals are kept at the front of a clause.
*/

use crate::{
    db::keys::ClauseKey,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Watch lists, indexed by literal index.
#[derive(Clone, Debug)]
pub struct WatchDB {
    lists: Vec<Vec<ClauseKey>>,
}

impl Default for WatchDB {
    /// A watch database with (empty) lists for the reserved atom `0`.
    fn default() -> Self {
        WatchDB {
            lists: vec![Vec::default(), Vec::default()],
        }
    }
}

impl WatchDB {
    /// Extends the database with lists for a fresh atom.
    pub fn fresh_atom(&mut self) {
        self.lists.push(Vec::default());
        self.lists.push(Vec::default());
    }

    /// Notes `key` is watching `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[literal.index()].push(key);
    }

    /// Removes the note that `key` is watching `literal`.
    ///
    /// An error is returned if `key` is not watching `literal`, as this indicates the watches of the clause are corrupt.
    pub fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) -> Result<(), err::BCPError> {
        let list = &mut self.lists[literal.index()];
        match list.iter().position(|watcher| *watcher == key) {
            Some(position) => {
                list.swap_remove(position);
                Ok(())
            }
            None => Err(err::BCPError::CorruptWatch),
        }
    }

    /// The keys of clauses watching `literal`.
    pub fn watchers(&self, literal: CLiteral) -> &[ClauseKey] {
        &self.lists[literal.index()]
    }

    /// Takes the watch list of `literal`, leaving an empty list in place.
    ///
    /// Used during propagation, so the list may be examined while the watches of other literals are updated.
    /// The (revised) list should be returned with [restore](WatchDB::restore).
    pub fn take(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Returns a list taken by [take](WatchDB::take).
    ///
    /// Any watches noted for `literal` between the take and the restore are kept.
    pub fn restore(&mut self, literal: CLiteral, mut list: Vec<ClauseKey>) {
        let slot = &mut self.lists[literal.index()];
        list.append(slot);
        *slot = list;
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn watch_and_unwatch() {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());

        let mut watch_db = WatchDB::default();
        watch_db.fresh_atom();
        watch_db.fresh_atom();

        watch_db.watch(1, a);
        watch_db.watch(1, b);
        watch_db.watch(-2, a);

        assert_eq!(watch_db.watchers(1), &[a, b]);
        assert!(watch_db.watchers(-1).is_empty());

        assert!(watch_db.unwatch(1, a).is_ok());
        assert_eq!(watch_db.watchers(1), &[b]);
        assert_eq!(watch_db.unwatch(1, a), Err(err::BCPError::CorruptWatch));
    }

    #[test]
    fn take_and_restore() {
        let mut keys: SlotMap<ClauseKey, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());

        let mut watch_db = WatchDB::default();
        watch_db.fresh_atom();

        watch_db.watch(-1, a);
        let taken = watch_db.take(-1);
        assert!(watch_db.watchers(-1).is_empty());

        watch_db.watch(-1, b);
        watch_db.restore(-1, taken);
        assert_eq!(watch_db.watchers(-1), &[a, b]);
    }
}
