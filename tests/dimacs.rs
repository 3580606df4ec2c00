use cdcl_sat::{
    config::Config,
    context::Context,
    reports::{Outcome, Report},
};

mod common;
use common::check_outcome;

mod dimacs {
    use cdcl_sat::builder::dimacs::parse_dimacs;

    use super::*;

    const UNSATISFIABLE: &str = "
c the two atom core, with a duplicate
p cnf 2 5
 1  2 0
-1  2 0
 1 -2 0
-1 -2 0
-1 -2 -1 0
";

    #[test]
    fn read_and_solve() {
        let mut the_context = Context::from_config(Config::default());
        let formula = the_context.read_dimacs(UNSATISFIABLE.as_bytes()).unwrap();
        assert_eq!(formula.atom_count, Some(2));

        let outcome = the_context.solve().unwrap();
        assert_eq!(outcome.report(), Report::Unsatisfiable);
        assert_eq!(check_outcome(&formula.clauses, &outcome), Ok(()));
    }

    #[test]
    fn clauses_across_lines() {
        let formula = parse_dimacs("p cnf 4 2\n1 2\n3 0 -4\n0\n".as_bytes()).unwrap();
        assert_eq!(formula.clauses, vec![vec![1, 2, 3], vec![-4]]);

        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.read_dimacs("p cnf 4 2\n1 2\n3 0 -4\n0\n".as_bytes()).is_ok());
        match the_context.solve().unwrap() {
            Outcome::Satisfiable(model) => {
                assert_eq!(model.atom_count(), 4);
                assert_eq!(model.value_of(4), Some(false));
            }
            outcome => panic!("expected a model, found {outcome:?}"),
        }
    }
}
