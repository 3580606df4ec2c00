//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//! As the trail doubles as the queue of assignments to propagate, the undone assignments are also removed from the queue.
//!
//! # Methods
//!
//! # [backjump](Context::backjump) --- Backjump to a target level
//!
//! Passing a target level greater than or equal to the current level is safe, and nothing will happen.
//!
//! # [assertion_level](Context::assertion_level) --- The backjump level of an asserting clause
//!
//! The assertion level of a clause is the second highest decision level of the literals of the clause, or 0 if the clause has at most one literal.
//! On an asserting clause, this is the lowest level at which the clause asserts its literal from the highest level.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// Each atom valued above the target level has its value cleared, and its phase saved.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for assignment in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(assignment.literal.atom());
        }
    }

    /// The assertion level of `clause`, whose literals must all be valued.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn assertion_level(&self, clause: &[CLiteral]) -> Result<LevelIndex, err::ErrorKind> {
        let mut top_two: (Option<LevelIndex>, Option<LevelIndex>) = (None, None);

        for literal in clause {
            let level = self
                .level_of(literal.atom())
                .ok_or(err::ErrorKind::Backjump)?;

            match top_two {
                (None, _) => top_two.0 = Some(level),
                (Some(first), _) if level > first => {
                    top_two.1 = top_two.0;
                    top_two.0 = Some(level);
                }
                (Some(_), None) => top_two.1 = Some(level),
                (Some(_), Some(second)) if level > second => top_two.1 = Some(level),
                _ => {}
            }
        }

        Ok(top_two.1.unwrap_or(0))
    }
}
