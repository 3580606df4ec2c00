//! Property tests of solves on small random formulas, checked against brute force.

use cdcl_sat::{
    builder::{load, load_with},
    config::Config,
    reports::{Outcome, Report},
    solve,
};
use proptest::prelude::*;

mod common;
use common::{brute_force, check_outcome};

const ATOMS: u32 = 8;

/// A literal over the atoms `1..=ATOMS`.
fn literal() -> impl Strategy<Value = i32> {
    (1..=ATOMS as i32, any::<bool>()).prop_map(|(atom, polarity)| match polarity {
        true => atom,
        false => -atom,
    })
}

/// A formula of up to `max_clauses` clauses, each with one to four literals.
fn formula(max_clauses: usize) -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(literal(), 1..=4), 0..=max_clauses)
}

/// A configuration which forgets and restarts often.
fn eager_config() -> Config {
    let mut config = Config::default();
    config.clause_db.ceiling.value = 3;
    config.luby_u.value = 1;
    config
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A model satisfies every clause, a proof is a valid refutation, and the verdict agrees with brute force.
    #[test]
    fn soundness(clauses in formula(40)) {
        let mut the_context = load(&clauses).unwrap();
        let outcome = solve(&mut the_context);

        prop_assert_eq!(check_outcome(&clauses, &outcome), Ok(()));
        prop_assert_eq!(
            outcome.report() == Report::Satisfiable,
            brute_force(ATOMS, &clauses)
        );
    }

    /// Removing learned clauses by subsumption or forgetting never changes the verdict.
    #[test]
    fn reduction_preserves_verdict(clauses in formula(40)) {
        let mut bare = Config::default();
        bare.subsumption.value = false;
        bare.forgetting.value = false;

        let mut kept = load_with(bare, None, &clauses).unwrap();
        let mut reduced = load_with(eager_config(), None, &clauses).unwrap();

        let kept_outcome = solve(&mut kept);
        let reduced_outcome = solve(&mut reduced);

        prop_assert_eq!(kept_outcome.report(), reduced_outcome.report());
        prop_assert_eq!(check_outcome(&clauses, &reduced_outcome), Ok(()));
    }

    /// Solving the same formula twice gives the same outcome.
    #[test]
    fn determinism(clauses in formula(30)) {
        let mut first = load(&clauses).unwrap();
        let mut second = load(&clauses).unwrap();

        prop_assert_eq!(solve(&mut first), solve(&mut second));
    }

    /// Adding clauses to an unsatisfiable formula keeps the formula unsatisfiable.
    #[test]
    fn monotonicity(clauses in formula(40), extra in formula(10)) {
        let mut the_context = load(&clauses).unwrap();
        if solve(&mut the_context).report() == Report::Unsatisfiable {
            let mut extended = clauses.clone();
            extended.extend(extra);

            let mut the_context = load(&extended).unwrap();
            let outcome = solve(&mut the_context);
            prop_assert_eq!(outcome.report(), Report::Unsatisfiable);
            prop_assert_eq!(check_outcome(&extended, &outcome), Ok(()));
        }
    }
}

#[test]
fn removing_every_clause_of_a_satisfiable_formula() {
    let clauses = vec![vec![1, -2], vec![2, 3]];
    let mut the_context = load(&clauses).unwrap();
    assert_eq!(solve(&mut the_context).report(), Report::Satisfiable);

    let mut the_context = load(Vec::<Vec<i32>>::new()).unwrap();
    assert!(matches!(solve(&mut the_context), Outcome::Satisfiable(_)));
}
