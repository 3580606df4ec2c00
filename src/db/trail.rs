/*!
The trail, an ordered record of assignments.

Each [Assignment] on the trail pairs a literal with the decision level at which the literal was assigned and the source of the assignment.

- Assignments at level `0` are forced, either by a unit clause or by propagation from other level `0` assignments.
- Each level `k > 0` begins with exactly one decision, followed by any consequences of the decision.

The trail is append only, until a backjump, at which point the trail is truncated to the end of some level.
So, the implication graph is never built: the antecedent of a literal is recorded with the assignment, and undoing an assignment is a truncation of the trail.

The trail also serves as the queue of literals for propagation, as every assignment after the `q_head` has not yet been propagated.
*/

use crate::{
    db::{keys::ClauseKey, LevelIndex},
    structures::literal::CLiteral,
};

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A decision.
    Decision,

    /// A unit clause, asserted at level `0`.
    Unit(ClauseKey),

    /// Propagation from the clause.
    BCP(ClauseKey),
}

impl AssignmentSource {
    /// The clause which forced the assignment, if any.
    pub fn antecedent(&self) -> Option<ClauseKey> {
        match self {
            Self::Decision => None,
            Self::Unit(key) | Self::BCP(key) => Some(*key),
        }
    }
}

/// A literal, with the level and source of its assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub literal: CLiteral,
    pub level: LevelIndex,
    pub source: AssignmentSource,
}

/// The trail.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    /// Assignments, in order.
    assignments: Vec<Assignment>,

    /// The index of the first assignment of each level above `0`.
    level_indicies: Vec<usize>,

    /// The index of the next assignment to propagate.
    pub q_head: usize,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// True if some decision is on the trail.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// Opens a fresh level, whose first assignment should be a decision.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.assignments.len());
    }

    /// Pushes an assignment of `literal` at the current level, returning the position of the assignment on the trail.
    pub fn push(&mut self, literal: CLiteral, source: AssignmentSource) -> usize {
        let position = self.assignments.len();
        self.assignments.push(Assignment {
            literal,
            level: self.level(),
            source,
        });
        position
    }

    /// The assignment at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Assignment> {
        self.assignments.get(position)
    }

    /// All assignments, in order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The position of the first assignment at `level`.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => self
                .level_indicies
                .get(level as usize - 1)
                .copied()
                .unwrap_or(self.assignments.len()),
        }
    }

    /// The assignments made at level `0`.
    pub fn top_level_assignments(&self) -> &[Assignment] {
        &self.assignments[..self.level_start(1)]
    }

    /// The next assignment to propagate, advancing the queue.
    pub fn next_queued(&mut self) -> Option<CLiteral> {
        let assignment = self.assignments.get(self.q_head)?;
        self.q_head += 1;
        Some(assignment.literal)
    }

    /// Truncates the trail to the end of `level`, returning the assignments removed, in order.
    ///
    /// Any removed assignment is also removed from the propagation queue.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<Assignment> {
        if self.level() <= level {
            return Vec::default();
        }
        let cut = self.level_start(level + 1);
        self.level_indicies.truncate(level as usize);
        self.q_head = std::cmp::min(self.q_head, cut);
        self.assignments.split_off(cut)
    }

    /// A count of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
