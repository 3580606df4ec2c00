//! Keys to clauses in the [clause database](crate::db::clause).
//!
//! Keys are [slotmap] keys, and so a key is stable for the life of the clause it refers to, and a key to a removed clause is never reused for a different clause.

use slotmap::Key;

slotmap::new_key_type! {
    /// A key to a clause in the clause database.
    pub struct ClauseKey;
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:?}", self.data())
    }
}
