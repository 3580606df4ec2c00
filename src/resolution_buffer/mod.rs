/*!
A buffer for the working clause of resolution-based analysis.

The buffer holds a clause, together with the [premise](crate::proof::Premise) which cites the clause in a proof.
Resolution of the working clause with some other clause on a pivot updates the clause, records the resolution as a [ProofStep], and updates the premise to cite the step.

For example, with `-1 -2 3` in the buffer, resolving on `3` with the clause `-3 4` leaves `-1 -2 4` in the buffer and appends the step (`-1 -2 4`, `3`, [`-1 -2 3`, `-3 4`]) to the proof.

The buffer also keeps a note of each atom occurring in some clause used during resolution, for use when bumping activity.
*/

use crate::{
    proof::{Premise, Proof, ProofStep},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The resolution buffer.
#[derive(Clone, Debug, Default)]
pub struct ResolutionBuffer {
    /// The working clause.
    clause: CClause,

    /// The premise citing the working clause, if a clause has been loaded.
    premise: Option<Premise>,

    /// Whether a literal is in the working clause, by literal index.
    present: Vec<bool>,

    /// Whether an atom has been used, by atom.
    used: Vec<bool>,

    /// The atoms used, in the order first used.
    used_atoms: Vec<Atom>,
}

impl ResolutionBuffer {
    /// Clears the buffer and loads `clause`, cited by `premise`.
    pub fn load(&mut self, clause: &[CLiteral], premise: Premise) {
        self.clear();
        for literal in clause {
            self.insert(*literal);
        }
        self.premise = Some(premise);
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        for literal in self.clause.drain(..) {
            self.present[literal.index()] = false;
        }
        for atom in self.used_atoms.drain(..) {
            self.used[atom as usize] = false;
        }
        self.premise = None;
    }

    /// True if `literal` is in the working clause.
    pub fn contains(&self, literal: CLiteral) -> bool {
        self.present.get(literal.index()).copied().unwrap_or(false)
    }

    /// The literals of the working clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// The premise citing the working clause, if any clause has been loaded.
    pub fn premise(&self) -> Option<Premise> {
        self.premise
    }

    /// The atoms occurring in some clause loaded or resolved, in the order first seen.
    pub fn atoms_used(&self) -> &[Atom] {
        &self.used_atoms
    }

    /// Resolves the working clause with `clause`, cited by `premise`, on the atom of `pivot`.
    ///
    /// `pivot` is the literal of the working clause, and so `clause` should contain the negation of `pivot`.
    /// The resolution is recorded to `proof`, and the literals new to the working clause are returned.
    pub fn resolve(
        &mut self,
        pivot: CLiteral,
        clause: &[CLiteral],
        premise: Premise,
        proof: &mut Proof,
    ) -> Result<Vec<CLiteral>, err::AnalysisError> {
        let working_premise = self.premise.ok_or(err::AnalysisError::NoAssertion)?;
        if !self.contains(pivot) || !clause.contains(&pivot.negate()) {
            return Err(err::AnalysisError::MissingAntecedent);
        }

        self.remove(pivot);

        let mut fresh = Vec::default();
        for literal in clause {
            self.note_use(literal.atom());
            if *literal != pivot.negate() && !self.contains(*literal) {
                self.insert(*literal);
                fresh.push(*literal);
            }
        }

        let step = ProofStep {
            clause: self.clause.clone(),
            pivot: Some(pivot.atom()),
            premises: vec![working_premise, premise],
        };
        self.premise = Some(proof.record(step));

        Ok(fresh)
    }

    /// Records the working clause as a step of `proof` without resolution, so the clause may be cited as a step.
    pub fn restate(&mut self, proof: &mut Proof) -> Result<Premise, err::AnalysisError> {
        let working_premise = self.premise.ok_or(err::AnalysisError::NoAssertion)?;
        let step = ProofStep {
            clause: self.clause.clone(),
            pivot: None,
            premises: vec![working_premise],
        };
        let premise = proof.record(step);
        self.premise = Some(premise);
        Ok(premise)
    }

    fn insert(&mut self, literal: CLiteral) {
        let index = literal.index();
        if self.present.len() <= index {
            self.present.resize(index + 2, false);
        }
        if !self.present[index] {
            self.present[index] = true;
            self.clause.push(literal);
        }
        self.note_use(literal.atom());
    }

    fn remove(&mut self, literal: CLiteral) {
        if let Some(position) = self.clause.iter().position(|l| *l == literal) {
            self.clause.swap_remove(position);
            self.present[literal.index()] = false;
        }
    }

    fn note_use(&mut self, atom: Atom) {
        let index = atom as usize;
        if self.used.len() <= index {
            self.used.resize(index + 1, false);
        }
        if !self.used[index] {
            self.used[index] = true;
            self.used_atoms.push(atom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_records_steps() {
        let mut buffer = ResolutionBuffer::default();
        let mut proof = Proof::default();

        buffer.load(&[-1, -2, 3], Premise::Original(0));
        let fresh = buffer.resolve(3, &[-3, 4, -1], Premise::Original(1), &mut proof);

        assert_eq!(fresh, Ok(vec![4]));
        assert!(!buffer.contains(3));
        assert!(buffer.contains(4));

        let mut literals = buffer.literals().to_vec();
        literals.sort();
        assert_eq!(literals, vec![-2, -1, 4]);

        assert_eq!(buffer.premise(), Some(Premise::Step(0)));
        assert_eq!(proof.steps()[0].pivot, Some(3));
        assert_eq!(
            proof.steps()[0].premises,
            vec![Premise::Original(0), Premise::Original(1)]
        );
        assert_eq!(buffer.atoms_used(), &[1, 2, 3, 4]);
    }

    #[test]
    fn resolution_requires_complementary_pivot() {
        let mut buffer = ResolutionBuffer::default();
        let mut proof = Proof::default();

        buffer.load(&[1, 2], Premise::Original(0));
        assert_eq!(
            buffer.resolve(1, &[1, 3], Premise::Original(1), &mut proof),
            Err(err::AnalysisError::MissingAntecedent)
        );
        assert!(proof.is_empty());
    }

    #[test]
    fn clear_resets_marks() {
        let mut buffer = ResolutionBuffer::default();
        buffer.load(&[5, -6], Premise::Original(2));
        buffer.clear();
        assert!(!buffer.contains(5));
        assert!(buffer.literals().is_empty());
        assert!(buffer.premise().is_none());
        assert!(buffer.atoms_used().is_empty());
    }
}
