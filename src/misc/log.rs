/*!
Targets for calls to [log].

The library installs no logger. The cli installs [env_logger](https://docs.rs/env_logger), and output may be narrowed by target:

```sh
RUST_LOG=analysis=trace,backjump=debug cdcl_cli solve formula.cnf
```

`log` is built with `release_max_level_off`, so release builds are silent.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// [BCP](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// [Analysis](crate::procedures::analysis) and refutation.
    pub const ANALYSIS: &str = "analysis";

    pub const BACKJUMP: &str = "backjump";

    /// Storage and removal in the [clause database](crate::db::clause), and clause input.
    pub const CLAUSE_DB: &str = "clause_db";

    pub const DECISION: &str = "decision";

    /// Forgetting learned clauses.
    pub const REDUCTION: &str = "reduction";

    pub const SUBSUMPTION: &str = "subsumption";

    /// Changes to the valuation of the [atom database](crate::db::atom).
    pub const VALUATION: &str = "valuation";

    /// Steps recorded to a [proof](crate::proof).
    pub const PROOF: &str = "proof";

    /// Transitions and outcome of a [solve](crate::procedures::solve).
    pub const SOLVE: &str = "solve";
}
