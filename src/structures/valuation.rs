/*!
(Partial) functions from atoms to boolean values.

The canonical valuation is a vector of optional booleans, indexed by atoms.
As atom `0` is reserved, the value at index `0` of a valuation has no meaning.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical implementation of a valuation.
pub type VValuation = Vec<Option<bool>>;

/// The status of a literal relative to a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralStatus {
    /// The atom of the literal has no value.
    Unassigned,

    /// The literal holds on the valuation.
    Satisfied,

    /// The negation of the literal holds on the valuation.
    Falsified,
}

/// Methods for reading a valuation.
pub trait Valuation {
    /// The value of `atom`, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// A count of atoms with a value, or without.
    fn atom_count(&self) -> usize;

    /// The status of `literal` on the valuation.
    fn literal_status(&self, literal: CLiteral) -> LiteralStatus {
        match self.value_of(literal.atom()) {
            None => LiteralStatus::Unassigned,
            Some(value) if value == literal.polarity() => LiteralStatus::Satisfied,
            Some(_) => LiteralStatus::Falsified,
        }
    }

    /// An iterator over atoms without a value, in order.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        (1..self.atom_count() as Atom).filter(|atom| self.value_of(*atom).is_none())
    }
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

impl Valuation for VValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
