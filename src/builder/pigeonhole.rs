//! Pigeonhole formulas, unsatisfiable whenever there are more pigeons than holes.
//!
//! The atom `(i - 1) * holes + j` stands for pigeon `i` being in hole `j`, with pigeons and holes counted from one.
//! The formula has a clause for each pigeon, requiring the pigeon to be in some hole, followed by a clause for each hole and pair of pigeons, requiring not both of the pigeons are in the hole.
//!
//! ```rust
//! # use cdcl_sat::builder::{load, pigeonhole::pigeonhole};
//! # use cdcl_sat::reports::Report;
//! let mut the_context = load(pigeonhole(3, 2)).unwrap();
//! assert_eq!(the_context.solve().unwrap().report(), Report::Unsatisfiable);
//! ```

use crate::structures::literal::IntLiteral;

/// The atom for `pigeon` being in `hole`.
fn in_hole(pigeon: u32, hole: u32, holes: u32) -> IntLiteral {
    ((pigeon - 1) * holes + hole) as IntLiteral
}

/// The clauses of the pigeonhole formula for `pigeons` and `holes`.
pub fn pigeonhole(pigeons: u32, holes: u32) -> Vec<Vec<IntLiteral>> {
    let mut clauses = Vec::default();

    for pigeon in 1..=pigeons {
        clauses.push((1..=holes).map(|hole| in_hole(pigeon, hole, holes)).collect());
    }

    for hole in 1..=holes {
        for pigeon in 1..=pigeons {
            for other in (pigeon + 1)..=pigeons {
                clauses.push(vec![
                    -in_hole(pigeon, hole, holes),
                    -in_hole(other, hole, holes),
                ]);
            }
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_into_two() {
        let clauses = pigeonhole(3, 2);
        assert_eq!(clauses.len(), 3 + 2 * 3);
        assert_eq!(clauses[0], vec![1, 2]);
        assert_eq!(clauses[2], vec![5, 6]);
        assert_eq!(clauses[3], vec![-1, -3]);
        assert_eq!(clauses[8], vec![-4, -6]);
    }
}
