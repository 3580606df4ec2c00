/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption], which records the range of permitted values.
Databases clone the parts of the configuration relevant to them when a context is built.

```rust
# use cdcl_sat::config::{Config, vsids::VSIDS};
let mut config = Config::default();
config.vsids_variant.value = VSIDS::MiniSAT;
assert!(!config.clause_db.ceiling.set(0));
assert!(config.clause_db.ceiling.set(100));
```
*/

use serde::Serialize;

use dbs::{AtomDBConfig, ClauseDBConfig};
use vsids::VSIDS;

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;

pub mod vsids;

mod retention;
pub use retention::Retention;

use crate::{context::ContextState, generic::luby::LubyRepresentation};

/// Representation of activity, of atoms and clauses.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Permit forgetting learned clauses when the count of learned clauses passes the ceiling.
    pub forgetting: ConfigOption<bool>,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise true.
    pub phase_saving: ConfigOption<bool>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// Permit backward subsumption of learned clauses by a freshly learned clause.
    pub subsumption: ConfigOption<bool>,

    /// The time limit for a solve, if any.
    pub time_limit: ConfigOption<Option<std::time::Duration>>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    /// The default context is configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            forgetting: ConfigOption {
                name: "forgetting",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                max_state: ContextState::Configuration,
                value: 128,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            subsumption: ConfigOption {
                name: "subsumption",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(std::time::Duration::MAX),
                max_state: ContextState::Configuration,
                value: None,
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                max_state: ContextState::Configuration,
                value: VSIDS::Chaff,
            },
        }
    }
}
