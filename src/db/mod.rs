//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + An arena of clauses, each addressed by a stable [ClauseKey](keys::ClauseKey). \
//!     From an external perspective there are two kinds of clause:
//!     * Original clauses \
//!       Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file).
//!       Original clauses are never removed.
//!     * Learned clauses \
//!       Clauses added to the context by resolution during [analysis](crate::procedures::analysis).
//!       Every learned clause is a consequence of the collection of original clauses, and so learned clauses may be removed at will.
//! - [The watch database](crate::db::watches)
//!   + For each literal, the keys of clauses watching the literal.
//! - [The trail](crate::db::trail)
//!   + The sequence of assignments made, together with decision levels and antecedents.
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms: the current valuation, saved phases, and activity.

pub mod atom;
pub mod clause;
pub mod keys;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;
