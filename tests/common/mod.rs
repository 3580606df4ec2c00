#![allow(dead_code)]

use std::collections::BTreeSet;

use cdcl_sat::{
    proof::{Premise, Proof},
    reports::{Model, Outcome},
    structures::literal::{IntLiteral, Literal},
};

type LiteralSet = BTreeSet<IntLiteral>;

/// Replays each step of `proof` against the input `clauses`, checking each step follows from its premises.
///
/// Ok if every step is valid and the last step derives the empty clause.
pub fn check_refutation(clauses: &[Vec<IntLiteral>], proof: &Proof) -> Result<(), String> {
    let mut derived: Vec<LiteralSet> = Vec::with_capacity(proof.len());

    for (index, step) in proof.steps().iter().enumerate() {
        let mut premises = Vec::with_capacity(step.premises.len());
        for premise in &step.premises {
            let clause = match premise {
                Premise::Original(i) => match clauses.get(*i) {
                    Some(clause) => clause.iter().copied().collect::<LiteralSet>(),
                    None => return Err(format!("step {index} cites missing input clause {i}")),
                },
                Premise::Step(i) if *i < index => derived[*i].clone(),
                Premise::Step(i) => return Err(format!("step {index} cites later step {i}")),
            };
            premises.push(clause);
        }

        let conclusion = step.clause.iter().copied().collect::<LiteralSet>();

        let expected = match (step.pivot, premises.as_slice()) {
            (None, [premise]) => premise.clone(),

            (Some(atom), [left, right]) => {
                let pivot = match (
                    left.contains(&IntLiteral::new(atom, true)),
                    left.contains(&IntLiteral::new(atom, false)),
                ) {
                    (true, false) => IntLiteral::new(atom, true),
                    (false, true) => IntLiteral::new(atom, false),
                    _ => return Err(format!("step {index}: pivot {atom} not in first premise")),
                };
                if !right.contains(&pivot.negate()) {
                    return Err(format!("step {index}: pivot {atom} not in second premise"));
                }

                left.iter()
                    .filter(|literal| **literal != pivot)
                    .chain(right.iter().filter(|literal| **literal != pivot.negate()))
                    .copied()
                    .collect()
            }

            _ => return Err(format!("step {index}: unexpected shape {step:?}")),
        };

        if expected != conclusion {
            return Err(format!(
                "step {index}: derived {conclusion:?}, expected {expected:?}"
            ));
        }

        derived.push(conclusion);
    }

    match derived.last() {
        Some(clause) if clause.is_empty() => Ok(()),
        _ => Err("the proof does not end with the empty clause".to_string()),
    }
}

/// True if `model` satisfies every clause of `clauses`.
pub fn model_satisfies(model: &Model, clauses: &[Vec<IntLiteral>]) -> bool {
    clauses.iter().all(|clause| model.satisfies(clause.as_slice()))
}

/// Determines satisfiability by trying every valuation of the atoms `1..=atoms`.
pub fn brute_force(atoms: u32, clauses: &[Vec<IntLiteral>]) -> bool {
    (0..(1_u64 << atoms)).any(|valuation| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = (valuation >> (literal.atom() - 1)) & 1 == 1;
                value == literal.polarity()
            })
        })
    })
}

/// Checks `outcome` is consistent with `clauses`.
/// A model must satisfy each clause, and a proof must be a valid refutation.
pub fn check_outcome(clauses: &[Vec<IntLiteral>], outcome: &Outcome) -> Result<(), String> {
    match outcome {
        Outcome::Satisfiable(model) => match model_satisfies(model, clauses) {
            true => Ok(()),
            false => Err(format!("model {} falsifies some clause", model.as_dimacs())),
        },
        Outcome::Unsatisfiable(proof) => check_refutation(clauses, proof),
        Outcome::Aborted => Err("the solve was aborted".to_string()),
    }
}
