/*!
Reading formulas in the DIMACS CNF format.

- Lines beginning with `c` are comments, and blank lines are skipped.
- A line `p cnf <atoms> <clauses>` declares the size of the formula, and is optional.
- Clauses are sequences of non-zero integers terminated by `0`, and a clause may span lines.
- A line beginning with `%` ends the formula, as in some SATLIB benchmarks.

```rust
# use cdcl_sat::builder::dimacs::parse_dimacs;
let dimacs = "
c an example
p cnf 3 2
 1 -2 0
 2  3
-1  0
";

let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
assert_eq!(formula.atom_count, Some(3));
assert_eq!(formula.clauses, vec![vec![1, -2], vec![2, 3, -1]]);
```
*/

use std::io::BufRead;

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{atom::Atom, literal::IntLiteral},
    types::err::{self},
};

/// A formula read from DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The count of atoms declared by the preamble, if any.
    pub atom_count: Option<Atom>,

    /// The count of clauses declared by the preamble, if any.
    pub clause_count: Option<usize>,

    /// The clauses, in order.
    pub clauses: Vec<Vec<IntLiteral>>,
}

/// Reads a formula from `reader`.
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
    let mut formula = Formula::default();
    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer = Vec::default();
    let mut line_counter = 0;

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
        }

        let line = buffer.trim();
        match line.chars().next() {
            None | Some('c') => continue,
            Some('%') => break 'line_loop,
            Some('p') => {
                let mut details = line.split_whitespace().skip(1);
                if details.next() != Some("cnf") {
                    return Err(err::ParseError::ProblemSpecification.into());
                }
                let atoms = details.next().and_then(|atoms| atoms.parse::<Atom>().ok());
                let clauses = details.next().and_then(|clauses| clauses.parse::<usize>().ok());
                match (atoms, clauses, details.next()) {
                    (Some(atoms), Some(clauses), None) => {
                        formula.atom_count = Some(atoms);
                        formula.clause_count = Some(clauses);
                    }
                    _ => return Err(err::ParseError::ProblemSpecification.into()),
                }
            }
            _ => {
                for token in line.split_whitespace() {
                    match token.parse::<IntLiteral>() {
                        Ok(0) => formula.clauses.push(std::mem::take(&mut clause_buffer)),
                        Ok(literal) => clause_buffer.push(literal),
                        Err(_) => {
                            return Err(
                                err::ParseError::Literal(line_counter, token.to_string()).into()
                            )
                        }
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        return Err(err::ParseError::MissingDelimiter(line_counter).into());
    }

    if let Some(expected) = formula.clause_count {
        if expected != formula.clauses.len() {
            log::warn!(target: targets::CLAUSE_DB, "Expected {expected} clauses, read {}", formula.clauses.len());
        }
    }

    Ok(formula)
}

impl Context {
    /// Reads a DIMACS formula from `reader` into the context.
    ///
    /// If the formula has a preamble, the count of atoms it declares is [declared](Context::declare_atoms).
    ///
    /// ```rust
    /// # use cdcl_sat::context::Context;
    /// # use cdcl_sat::config::Config;
    /// # use cdcl_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = "
    ///  1  2 0
    ///  1 -2 0
    /// -1  2 0
    /// -1 -2 0
    /// ";
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
    /// assert!(the_context.solve().is_ok());
    /// assert_eq!(the_context.report(), Report::Unsatisfiable);
    /// ```
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
        let formula = parse_dimacs(reader)?;
        if let Some(count) = formula.atom_count {
            self.declare_atoms(count)?;
        }
        self.add_clauses(&formula.clauses)?;
        Ok(formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_percent() {
        let dimacs = "c comment\n\np cnf 2 1\n1 2 0\n%\n0\n";
        let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clauses, vec![vec![1, 2]]);
        assert_eq!(formula.clause_count, Some(1));
    }

    #[test]
    fn no_preamble() {
        let formula = parse_dimacs("-1 0\n0\n".as_bytes()).unwrap();
        assert_eq!(formula.atom_count, None);
        assert_eq!(formula.clauses, vec![vec![-1], vec![]]);
    }

    #[test]
    fn missing_delimiter() {
        assert_eq!(
            parse_dimacs("1 2 0\n3 4\n".as_bytes()),
            Err(err::ErrorKind::from(err::ParseError::MissingDelimiter(2)))
        );
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            parse_dimacs("p cnf x 2\n".as_bytes()),
            Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            parse_dimacs("1 a 0\n".as_bytes()),
            Err(err::ErrorKind::from(err::ParseError::Literal(1, "a".to_string())))
        );
    }

    #[test]
    fn declared_count_enforced() {
        let mut the_context = Context::from_config(crate::config::Config::default());
        assert!(the_context
            .read_dimacs("p cnf 2 1\n1 3 0\n".as_bytes())
            .is_err());
    }
}
