use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};

use cdcl_sat::config::{vsids::VSIDS, Config, Retention};

/// Determines whether a formula is satisfiable or unsatisfiable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a formula in DIMACS CNF form
    Solve(SolveArgs),

    /// Write a pigeonhole formula in DIMACS CNF form
    Pigeonhole {
        /// The count of pigeons
        pigeons: u32,

        /// The count of holes
        holes: u32,
    },
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// The DIMACS form CNF file to parse, optionally xz compressed
    pub formula_file: PathBuf,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// Display the resolution proof on UNSAT
    #[arg(short, long, default_value_t = false)]
    pub proof: bool,

    /// Display the outcome as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Display the configuration used, as JSON
    #[arg(long, default_value_t = false)]
    pub show_config: bool,

    /// Disable removal of learned clauses subsumed by a newly learned clause
    #[arg(long, default_value_t = false)]
    pub no_subsumption: bool,

    /// Disable forgetting learned clauses, on occassion
    #[arg(long, default_value_t = false)]
    pub no_forgetting: bool,

    /// Disable restarts
    #[arg(long, default_value_t = false)]
    pub no_restarts: bool,

    /// Disable phase saving, so decisions always value an atom true
    #[arg(long, default_value_t = false)]
    pub no_phase_saving: bool,

    /// Which VSIDS variant to use
    #[arg(long = "vsids", value_enum)]
    pub vsids: Option<VSIDS>,

    /// Which learned clauses to keep when forgetting
    #[arg(long, value_enum)]
    pub retention: Option<Retention>,

    /// The count of learned clauses at which forgetting happens
    #[arg(long)]
    pub ceiling: Option<usize>,

    /// The u value to use for the luby calculation when restarts are permitted
    #[arg(short = 'l', long = "luby")]
    pub luby_u: Option<u32>,

    /// Time limit for the solve, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time: Option<Duration>,
}

impl SolveArgs {
    /// The configuration given by the arguments, with defaults for anything not given.
    ///
    /// Values out of the bounds of an option are noted and ignored.
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        config.subsumption.value = !self.no_subsumption;
        config.forgetting.value = !self.no_forgetting;
        config.restart.value = !self.no_restarts;
        config.phase_saving.value = !self.no_phase_saving;

        if let Some(vsids) = self.vsids {
            config.vsids_variant.value = vsids;
        }
        if let Some(retention) = self.retention {
            config.clause_db.retention.value = retention;
        }
        if let Some(ceiling) = self.ceiling {
            if !config.clause_db.ceiling.set(ceiling) {
                println!("c Ignored out of bounds ceiling {ceiling}");
            }
        }
        if let Some(luby_u) = self.luby_u {
            if !config.luby_u.set(luby_u) {
                println!("c Ignored out of bounds luby value {luby_u}");
            }
        }
        if self.time.is_some() {
            config.time_limit.value = self.time;
        }

        config
    }
}
