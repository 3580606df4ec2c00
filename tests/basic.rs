use cdcl_sat::{
    builder::{load, load_with, pigeonhole::pigeonhole, ClauseOk},
    config::Config,
    context::Context,
    proof::Premise,
    reports::{Outcome, Report},
    solve,
    types::err::{self},
};

mod common;
use common::check_outcome;

mod scenarios {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = load(vec![vec![1]]).unwrap();
        match solve(&mut the_context) {
            Outcome::Satisfiable(model) => assert_eq!(model.value_of(1), Some(true)),
            outcome => panic!("expected a model, found {outcome:?}"),
        }
    }

    #[test]
    fn complementary_units() {
        let clauses = vec![vec![1], vec![-1]];
        let mut the_context = load(&clauses).unwrap();
        let outcome = solve(&mut the_context);

        match &outcome {
            Outcome::Unsatisfiable(proof) => {
                let last = proof.steps().last().unwrap();
                assert!(last.clause.is_empty());
                assert_eq!(last.pivot, Some(1));
            }
            outcome => panic!("expected a proof, found {outcome:?}"),
        }
        assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
    }

    #[test]
    fn two_atom_core() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
        let mut the_context = load(&clauses).unwrap();
        let outcome = solve(&mut the_context);

        assert_eq!(outcome.report(), Report::Unsatisfiable);
        assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
    }

    #[test]
    fn three_pigeons_two_holes() {
        let clauses = pigeonhole(3, 2);
        let mut the_context = load(&clauses).unwrap();
        let outcome = solve(&mut the_context);

        assert_eq!(outcome.report(), Report::Unsatisfiable);
        assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
    }

    #[test]
    fn one_clause_of_three() {
        let clauses = vec![vec![1, 2, 3]];
        let mut the_context = load(&clauses).unwrap();
        let outcome = solve(&mut the_context);

        assert_eq!(outcome.report(), Report::Satisfiable);
        assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
    }
}

mod edges {
    use super::*;

    #[test]
    fn no_clauses() {
        let mut the_context = load(Vec::<Vec<i32>>::new()).unwrap();
        match solve(&mut the_context) {
            Outcome::Satisfiable(model) => assert_eq!(model.atom_count(), 0),
            outcome => panic!("expected a model, found {outcome:?}"),
        }
    }

    #[test]
    fn empty_clause() {
        let clauses = vec![vec![1, 2], vec![], vec![-1]];
        let mut the_context = load(&clauses).unwrap();

        match solve(&mut the_context) {
            Outcome::Unsatisfiable(proof) => {
                assert_eq!(proof.len(), 1);
                let step = &proof.steps()[0];
                assert!(step.clause.is_empty());
                assert_eq!(step.pivot, None);
                assert_eq!(step.premises, vec![Premise::Original(1)]);
            }
            outcome => panic!("expected a proof, found {outcome:?}"),
        }
    }

    #[test]
    fn malformed_input() {
        assert_eq!(
            load(vec![vec![1, 2], vec![0]]).err(),
            Some(err::ErrorKind::from(err::MalformedClauseError::ZeroLiteral { clause: 1 }))
        );

        assert!(matches!(
            load_with(Config::default(), Some(3), vec![vec![1, -4]]),
            Err(err::ErrorKind::MalformedClause(
                err::MalformedClauseError::AtomOutOfRange { literal: -4, limit: 3, .. }
            ))
        ));
    }

    #[test]
    fn declared_atoms_in_model() {
        let mut the_context = load_with(Config::default(), Some(4), vec![vec![2]]).unwrap();
        match solve(&mut the_context) {
            Outcome::Satisfiable(model) => {
                assert_eq!(model.atom_count(), 4);
                assert_eq!(model.value_of(2), Some(true));
            }
            outcome => panic!("expected a model, found {outcome:?}"),
        }
    }

    #[test]
    fn tautologies_and_duplicates() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.add_clause(vec![1, -1, 2]), Ok(ClauseOk::Tautology));
        assert!(the_context.add_clause(vec![-2, -2]).is_ok());
        assert!(the_context.add_clause(vec![2, 3, 2]).is_ok());

        match the_context.solve() {
            Ok(Outcome::Satisfiable(model)) => {
                assert_eq!(model.value_of(2), Some(false));
                assert_eq!(model.value_of(3), Some(true));
            }
            outcome => panic!("expected a model, found {outcome:?}"),
        }
    }

    #[test]
    fn solve_once() {
        let mut the_context = load(vec![vec![1, 2]]).unwrap();
        assert!(the_context.solve().is_ok());
        assert_eq!(
            the_context.solve(),
            Err(err::ErrorKind::from(err::StateError::SolveComplete))
        );
    }
}

mod limits {
    use std::sync::{atomic::AtomicBool, Arc};

    use super::*;

    #[test]
    fn cancelled_before_solve() {
        let mut the_context = load(pigeonhole(6, 5)).unwrap();
        the_context.set_cancel_flag(Arc::new(AtomicBool::new(true)));

        assert_eq!(solve(&mut the_context), Outcome::Aborted);
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn zero_time_limit() {
        let mut config = Config::default();
        config.time_limit.value = Some(std::time::Duration::ZERO);

        let mut the_context = load_with(config, None, pigeonhole(7, 6)).unwrap();
        assert_eq!(solve(&mut the_context), Outcome::Aborted);
    }
}

mod configurations {
    use cdcl_sat::config::{vsids::VSIDS, Retention};

    use super::*;

    fn configs() -> Vec<Config> {
        let mut configs = vec![Config::default()];

        let mut bare = Config::default();
        bare.subsumption.value = false;
        bare.forgetting.value = false;
        bare.restart.value = false;
        bare.phase_saving.value = false;
        configs.push(bare);

        let mut busy = Config::default();
        busy.vsids_variant.value = VSIDS::MiniSAT;
        busy.clause_db.retention.value = Retention::RecentWindow;
        busy.clause_db.ceiling.value = 4;
        busy.clause_db.window.value = 2;
        busy.luby_u.value = 1;
        configs.push(busy);

        configs
    }

    #[test]
    fn pigeonholes() {
        for config in configs() {
            for (pigeons, holes) in [(3, 2), (4, 3), (5, 4), (4, 4)] {
                let clauses = pigeonhole(pigeons, holes);
                let mut the_context = load_with(config.clone(), None, &clauses).unwrap();
                let outcome = solve(&mut the_context);

                let expected = match pigeons > holes {
                    true => Report::Unsatisfiable,
                    false => Report::Satisfiable,
                };
                assert_eq!(outcome.report(), expected);
                assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
            }
        }
    }
}
