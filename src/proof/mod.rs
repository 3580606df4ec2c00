/*!
A record of the resolution steps taken during a solve.

# Overview

Each clause learned during a solve is derived by resolution from clauses in the [clause database](crate::db::clause), and each resolution is noted as a [ProofStep]:
- The clause derived.
- The atom resolved on, the *pivot*.
- The clauses resolved, the *premises*.

A premise is either an original clause, identified by the position of the clause in the input, or the clause of some earlier step.
So, a proof is self-contained, and may be checked without access to the context which produced it.

If a formula is unsatisfiable, the last step of the [Proof] has the empty clause as its conclusion.

# Example

For the formula `[[1], [-1]]` the proof is a single step:

```rust
# use cdcl_sat::{load, solve, reports::Outcome, proof::Premise};
let mut context = load(vec![vec![1], vec![-1]]).unwrap();

match solve(&mut context) {
    Outcome::Unsatisfiable(proof) => {
        assert_eq!(proof.len(), 1);

        let step = &proof.steps()[0];
        assert!(step.clause.is_empty());
        assert_eq!(step.pivot, Some(1));
        assert_eq!(step.premises, vec![Premise::Original(1), Premise::Original(0)]);
    }
    _ => panic!("expected a refutation"),
}
```

The proof is not checked by the library.
*/

use serde::Serialize;

use crate::structures::{atom::Atom, clause::CClause};

/// A clause used in a resolution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Premise {
    /// An original clause, by position in the input.
    Original(usize),

    /// The clause derived at some earlier step, by position in the proof.
    Step(usize),
}

/// A single step of a proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    /// The clause derived.
    pub clause: CClause,

    /// The atom resolved on.
    /// A step without a pivot restates its single premise.
    pub pivot: Option<Atom>,

    /// The clauses resolved.
    pub premises: Vec<Premise>,
}

/// A sequence of resolution steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Appends `step` to the proof, returning the premise which refers to the step.
    pub fn record(&mut self, step: ProofStep) -> Premise {
        log::trace!(target: crate::misc::log::targets::PROOF, "Step {}: {:?}", self.steps.len(), step);
        self.steps.push(step);
        Premise::Step(self.steps.len() - 1)
    }

    /// The steps of the proof, in order.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// A count of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the proof has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if the last step of the proof derives the empty clause.
    pub fn is_refutation(&self) -> bool {
        self.steps.last().is_some_and(|step| step.clause.is_empty())
    }
}
