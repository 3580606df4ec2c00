/*!
Which atoms have their activity bumped after analysis.

For background, see [Understanding VSIDS branching heuristics in conflict-driven clause-learning sat solvers](https://arxiv.org/abs/1506.08905).
*/

use serde::Serialize;

/// The VSIDS variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum VSIDS {
    /// Bump the atoms of the learned clause, as in [Chaff](https://dl.acm.org/doi/10.1145/378239.379017).
    Chaff,

    /// Bump the atoms of every clause resolved during analysis, as in [MiniSAT](https://link.springer.com/chapter/10.1007/978-3-540-24605-3_37).
    #[value(name = "minisat")]
    MiniSAT,
}

impl VSIDS {
    pub const MIN: VSIDS = VSIDS::Chaff;
    pub const MAX: VSIDS = VSIDS::MiniSAT;
}

impl std::fmt::Display for VSIDS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chaff => write!(f, "Chaff"),
            Self::MiniSAT => write!(f, "MiniSAT"),
        }
    }
}
