//! Configuration of databases, typically derived from the configuration of a context.

use serde::Serialize;

use crate::context::ContextState;

use super::{Activity, ConfigOption, Retention};

/// Configuration for the atom database.
#[derive(Clone, Debug, Serialize)]
pub struct AtomDBConfig {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The factor by which the activity of every atom decays, relative to the next bump.
    pub decay: ConfigOption<Activity>,

    /// The number of conflicts between each decay.
    pub decay_interval: ConfigOption<u32>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: Activity::EPSILON,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.95,
            },

            decay_interval: ConfigOption {
                name: "atom_decay_interval",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 1,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone, Debug, Serialize)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The factor by which the activity of every clause decays each conflict, relative to the next bump.
    pub decay: ConfigOption<Activity>,

    /// The count of learned clauses above which learned clauses are forgotten.
    pub ceiling: ConfigOption<usize>,

    /// Which learned clauses are retained when forgetting.
    pub retention: ConfigOption<Retention>,

    /// The count of recent learned clauses kept by [Retention::RecentWindow].
    pub window: ConfigOption<usize>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: Activity::EPSILON,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.999,
            },

            ceiling: ConfigOption {
                name: "clause_ceiling",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 2_000,
            },

            retention: ConfigOption {
                name: "retention",
                min: Retention::MIN,
                max: Retention::MAX,
                max_state: ContextState::Configuration,
                value: Retention::ActivityHalf,
            },

            window: ConfigOption {
                name: "clause_window",
                min: 0,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 50,
            },
        }
    }
}
