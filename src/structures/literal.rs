//! Literals are atoms paired with a (boolean) polarity.
//!
//! Throughout the library literals are integers, with the sign of the integer indicating polarity and the magnitude the atom, as in the DIMACS format.
//! Still, access to the atom and polarity of a literal is made through the [Literal] trait.
//!
//! ```rust
//! # use cdcl_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```
//!
//! Literals also have an [index](Literal::index), which is used to address per-literal structures such as the [watch index](crate::db::watches).
//! The index of a literal is `2 * atom + polarity`, so both literals of atom `0` occupy the (unused) first two indicies.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// A unique index for the literal, distinct from the index of the negation of the literal.
    fn index(&self) -> usize;

    /// The literal in DIMACS form.
    fn as_dimacs(&self) -> String;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self) -> usize {
        (2 * self.atom() as usize) + self.polarity() as usize
    }

    fn as_dimacs(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicies_are_distinct() {
        let p = CLiteral::new(3, true);
        let not_p = CLiteral::new(3, false);

        assert_eq!(p.index(), 7);
        assert_eq!(not_p.index(), 6);
        assert_eq!(p.negate().index(), not_p.index());
        assert_ne!(CLiteral::new(4, false).index(), p.index());
    }

    #[test]
    fn atom_and_polarity() {
        let literal: CLiteral = -12;
        assert_eq!(literal.atom(), 12);
        assert!(!literal.polarity());
        assert_eq!(literal.negate(), 12);
        assert_eq!(literal.as_dimacs(), "-12");
    }
}
