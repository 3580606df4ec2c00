/*!
Boolean constraint propagation.

See [Context::bcp] and [Context::propagate] for the relevant context methods.

# Overview

Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal, which is now false, and for each clause either:
- Keeping the watch, as the other watched literal is true.
- Moving the watch to some other literal of the clause which is not false.
- Assigning the other watched literal, as every other literal of the clause is false.
- Noting a conflict, as every literal of the clause is false.

Propagation continues, literal by literal, through the trail until every assignment has been propagated or a conflict is found.

# Complications

The watch list under examination is [taken](crate::db::watches::WatchDB::take) from the watch database for the duration of the examination, and [restored](crate::db::watches::WatchDB::restore) after.
This allows the watches of other literals to be updated while traversing the list.
And, the taken list is never the target of an update, as a watch only moves to a literal which is not false, while the list is for a false literal.

On a conflict, the remainder of the list is restored untouched, so the watches of each clause remain consistent with the watch lists.

# Example

```rust,ignore
match self.propagate() {
    Err(err::BCPError::Conflict(key)) => {
        // analysis of the conflict
    }
    Err(e) => return Err(e.into()),
    Ok(()) => {
        // make a decision
    }
}
```
*/

use crate::{
    context::Context,
    db::{clause::WatchUpdate, trail::AssignmentSource},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl Context {
    /// Propagates every assignment on the trail which has not been propagated.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_queued() {
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// Propagates the assignment of `literal`.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();
        let mut watchers = self.watch_db.take(false_literal);

        let mut result = Ok(());
        let mut index = 0;

        while index < watchers.len() {
            let key = watchers[index];

            let update = match self.clause_db.get_mut(key) {
                Ok(clause) => clause.update_watch(false_literal, self.atom_db.valuation()),
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch list of {false_literal} holds missing clause {key}");
                    Err(err::BCPError::CorruptWatch)
                }
            };

            match update {
                Ok(WatchUpdate::Witness) => index += 1,

                Ok(WatchUpdate::Moved(watch)) => {
                    self.watch_db.watch(watch, key);
                    watchers.swap_remove(index);
                }

                Ok(WatchUpdate::Asserts(consequence)) => {
                    log::trace!(target: targets::PROPAGATION, "{key} asserts {consequence}");
                    self.record_assignment(consequence, AssignmentSource::BCP(key));
                    self.counters.total_propagations += 1;
                    index += 1;
                }

                Ok(WatchUpdate::Conflict) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key} from {literal}");
                    result = Err(err::BCPError::Conflict(key));
                    break;
                }

                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        self.watch_db.restore(false_literal, watchers);
        result
    }
}
