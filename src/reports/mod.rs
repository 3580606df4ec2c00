/*!
Reports on a solve.

- An [Outcome] is the result of a solve, and carries either a [Model], a [Proof], or nothing if the solve was aborted.
- A [Report] is a summary of the state of a context, without the supporting model or proof.
*/

use serde::Serialize;

use crate::{
    context::ContextState,
    proof::Proof,
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// The result of a solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The formula is satisfiable, on the model.
    Satisfiable(Model),

    /// The formula is unsatisfiable, as witnessed by the proof.
    Unsatisfiable(Proof),

    /// The solve was cancelled, or ran out of time.
    Aborted,
}

impl Outcome {
    /// The report corresponding to the outcome.
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable(_) => Report::Unsatisfiable,
            Self::Aborted => Report::Unknown,
        }
    }
}

/// A complete valuation of the atoms of a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Model {
    /// The value of atom `a` is at index `a - 1`.
    values: Vec<bool>,
}

impl Model {
    pub fn from_values(values: Vec<bool>) -> Self {
        Model { values }
    }

    /// The value of `atom`, if `atom` is an atom of the formula.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match atom {
            0 => None,
            _ => self.values.get(atom as usize - 1).copied(),
        }
    }

    /// A count of atoms valued by the model.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// The model as a sequence of literals, true on the model, in order of atom.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| CLiteral::new(index as Atom + 1, *value))
    }

    /// True if some literal of `clause` holds on the model.
    pub fn satisfies(&self, clause: &(impl Clause + ?Sized)) -> bool {
        clause
            .literals()
            .iter()
            .any(|literal| self.value_of(literal.atom()) == Some(literal.polarity()))
    }

    /// The model in DIMACS form, as the body of a `v` line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(&literal.as_dimacs());
            the_string.push(' ');
        }
        the_string.push('0');
        the_string
    }
}

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration
            | ContextState::Input
            | ContextState::Solving
            | ContextState::Aborted => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_values() {
        let model = Model::from_values(vec![true, false, true]);
        assert_eq!(model.value_of(0), None);
        assert_eq!(model.value_of(2), Some(false));
        assert_eq!(model.value_of(4), None);
        assert_eq!(model.as_dimacs(), "1 -2 3 0");

        let clause: Vec<CLiteral> = vec![-1, 2];
        assert!(!model.satisfies(&clause));
        let clause: Vec<CLiteral> = vec![-1, -2];
        assert!(model.satisfies(&clause));
    }
}
