use serde::Serialize;

/// Which learned clauses to keep when the clause database forgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
pub enum Retention {
    /// Keep the half of the learned clauses with the highest activity.
    ActivityHalf,

    /// Keep the most recently learned clauses, up to the size of the window.
    RecentWindow,
}

impl Retention {
    /// The minimum Retention policy.
    pub const MIN: Retention = Retention::ActivityHalf;

    /// The maximum Retention policy.
    pub const MAX: Retention = Retention::RecentWindow;
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActivityHalf => write!(f, "ActivityHalf"),
            Self::RecentWindow => write!(f, "RecentWindow"),
        }
    }
}
