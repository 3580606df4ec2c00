/*!
Clauses, aka. disjunctions of literals.

The canonical representation of a clause is a vector of literals, [CClause].
Methods for examining a clause are given by the [Clause] trait, which is implemented for anything which may be viewed as a slice of literals.
So, the trait applies equally to a [CClause], a slice of a [CClause], or a clause in the [clause database](crate::db::clause).

Within the library, the literals of a clause are kept free of duplicates and tautologies are never stored.
Still, the order of literals in a clause is significant, as the first two literals of a stored clause are its watched literals.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::{LiteralStatus, Valuation},
};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// Methods for examining a clause.
pub trait Clause {
    /// The literals of the clause, in order.
    fn literals(&self) -> &[CLiteral];

    /// The number of literals in the clause.
    fn size(&self) -> usize {
        self.literals().len()
    }

    /// The atoms of the clause, in the order of the literals.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().iter().map(|literal| literal.atom())
    }

    /// True if the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool {
        let literals = self.literals();
        literals
            .iter()
            .any(|literal| literals.contains(&literal.negate()))
    }

    /// True if some literal of the clause is satisfied on `valuation`.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .iter()
            .any(|literal| valuation.literal_status(*literal) == LiteralStatus::Satisfied)
    }

    /// True if every literal of the clause is falsified on `valuation`.
    fn falsified_on(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .iter()
            .all(|literal| valuation.literal_status(*literal) == LiteralStatus::Falsified)
    }

    /// The clause as a string of space separated literals, with a trailing `0` if `zero` is set.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(&literal.as_dimacs());
            the_string.push(' ');
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }
}

impl<C: AsRef<[CLiteral]> + ?Sized> Clause for C {
    fn literals(&self) -> &[CLiteral] {
        self.as_ref()
    }
}

/// Removes duplicate literals from `clause`, preserving the order of first occurrence.
pub fn deduplicate(clause: &mut CClause) {
    let mut index = 0;
    while index < clause.len() {
        if clause[..index].contains(&clause[index]) {
            clause.remove(index);
        } else {
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_strings() {
        let clause: CClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");

        let empty: CClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
    }

    #[test]
    fn deduplication_keeps_first_occurrence() {
        let mut clause: CClause = vec![2, 1, 2, -3, 1];
        deduplicate(&mut clause);
        assert_eq!(clause, vec![2, 1, -3]);
    }

    #[test]
    fn tautology() {
        let tautology: CClause = vec![1, 2, -1];
        assert!(tautology.is_tautology());

        let clause: CClause = vec![1, 2, -3];
        assert!(!clause.is_tautology());
    }

    #[test]
    fn valuation_status() {
        let valuation: Vec<Option<bool>> = vec![None, Some(false), Some(true), None];
        let clause: CClause = vec![1, -2];
        assert!(clause.falsified_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));

        let clause: CClause = vec![1, 3];
        assert!(!clause.falsified_on(&valuation));
    }
}
