#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use clap::Parser;

use cdcl_sat::{
    builder::{dimacs::parse_dimacs, load_with, pigeonhole::pigeonhole},
    context::Context,
    reports::Outcome,
    structures::clause::Clause,
    types::err::{self},
};

mod args;

use args::{Cli, Command, SolveArgs};

/// Exit codes, following SAT competition conventions.
mod exit {
    pub const SATISFIABLE: i32 = 10;
    pub const UNSATISFIABLE: i32 = 20;
    pub const UNKNOWN: i32 = 0;
    pub const INPUT_ERROR: i32 = 1;
    pub const INTERNAL_ERROR: i32 = 2;
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let code = match cli.command {
        Command::Solve(args) => solve(args),
        Command::Pigeonhole { pigeons, holes } => {
            println!("c pigeonhole {pigeons} {holes}");
            let clauses = pigeonhole(pigeons, holes);
            println!("p cnf {} {}", pigeons * holes, clauses.len());
            for clause in clauses {
                println!("{}", clause.as_dimacs(true));
            }
            exit::UNKNOWN
        }
    };

    std::process::exit(code)
}

fn solve(args: SolveArgs) -> i32 {
    let config = args.config();

    if args.show_config {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("c Unable to display the configuration: {e}"),
        }
    }

    println!("c Reading DIMACS file from {:?}", args.formula_file);
    let formula = match read_formula(&args.formula_file) {
        Ok(formula) => formula,
        Err(message) => {
            println!("c {message}");
            return exit::INPUT_ERROR;
        }
    };
    println!(
        "c Read {} clauses over {} atoms",
        formula.clauses.len(),
        formula
            .atom_count
            .map_or("undeclared".to_string(), |count| count.to_string())
    );

    let mut the_context = match load_with(config, formula.atom_count, &formula.clauses) {
        Ok(context) => context,
        Err(e) => {
            println!("c Error loading the formula: {e}");
            return exit::INPUT_ERROR;
        }
    };

    let outcome = match the_context.solve() {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("c Solve error: {e}");
            return exit::INTERNAL_ERROR;
        }
    };

    if args.stats {
        display_stats(&the_context);
    }

    if args.json {
        match serde_json::to_string(&outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("c Unable to display the outcome: {e}"),
        }
    }

    println!("s {}", outcome.report());

    match outcome {
        Outcome::Satisfiable(model) => {
            if args.model {
                println!("v {}", model.as_dimacs());
            }
            exit::SATISFIABLE
        }
        Outcome::Unsatisfiable(proof) => {
            if args.proof {
                for (index, step) in proof.steps().iter().enumerate() {
                    let pivot = step.pivot.map_or("-".to_string(), |atom| atom.to_string());
                    let premises = step
                        .premises
                        .iter()
                        .map(|premise| format!("{premise:?}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("c step {index}: [{}] pivot {pivot} from {premises}", step.clause.as_dimacs(false));
                }
            }
            exit::UNSATISFIABLE
        }
        Outcome::Aborted => exit::UNKNOWN,
    }
}

/// Reads the formula at `path`, decompressing if the file has an `xz` extension.
fn read_formula(path: &Path) -> Result<cdcl_sat::builder::dimacs::Formula, String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(format!("Failed to open CNF file: {e}")),
    };

    let reader: Box<dyn BufRead> = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Box::new(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            return Err("Reading xz compressed files requires the xz feature".to_string())
        }

        _ => Box::new(BufReader::new(file)),
    };

    parse_dimacs(reader).map_err(|e: err::ErrorKind| format!("Error parsing DIMACS: {e}"))
}

fn display_stats(context: &Context) {
    let counters = &context.counters;
    println!("c Atoms:        {}", context.atom_db.count());
    println!("c Clauses:      {}", context.clause_db.original_count());
    println!("c Conflicts:    {}", counters.total_conflicts);
    println!("c Decisions:    {}", counters.total_decisions);
    println!("c Propagations: {}", counters.total_propagations);
    println!("c Learned:      {}", counters.learned);
    println!("c Subsumed:     {}", counters.subsumed);
    println!("c Forgotten:    {}", counters.forgotten);
    println!("c Restarts:     {}", counters.restarts);
    println!("c Time:         {:.2?}", counters.time);
}
