use std::time::Duration;

use crate::generic::luby::Luby;

/// Counts of events during a solve.
#[derive(Clone, Debug)]
pub struct Counters {
    /// Conflicts, over the whole solve.
    pub total_conflicts: usize,

    /// Conflicts since the last restart, compared against the luby schedule.
    pub fresh_conflicts: u32,

    /// Decisions.
    pub total_decisions: usize,

    /// Assignments made by BCP.
    pub total_propagations: usize,

    /// Transitions of the solve state machine.
    pub total_iterations: usize,

    /// A count of clauses learned.
    pub learned: usize,

    /// A count of learned clauses removed by subsumption.
    pub subsumed: usize,

    /// A count of learned clauses forgotten.
    pub forgotten: usize,

    /// Restarts.
    pub restarts: usize,

    /// Time elapsed since the solve began.
    pub time: Duration,

    /// Position in the luby sequence of restart intervals.
    pub luby: Luby,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,
            total_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,

            learned: 0,
            subsumed: 0,
            forgotten: 0,

            restarts: 0,
            time: Duration::from_secs(0),

            luby: Luby::default(),
        }
    }
}
