//! Errors.
//!
//! - Some of these are external, and arise from a malformed formula, e.g. a [MalformedClauseError].
//!   These are returned before a solve starts, and a solve never starts on a malformed formula.
//! - Some of these are internally expected, e.g. BCP errors are used to control the flow of a solve.
//! - The remainder indicate some invariant of the solver has been broken, e.g. a watch list has been corrupted.
//!   These are programming errors, and are never recovered from.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
// Imported as `err::{self}`, so uses read `err::ErrorKind`, etc.

use crate::{
    db::keys::ClauseKey,
    structures::{atom::Atom, literal::CLiteral},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    MalformedClause(MalformedClauseError),
    Parse(ParseError),
    State(StateError),

    /// An attempt to backjump to a level above the current level.
    Backjump,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::BCP(e) => write!(f, "Propagation error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::MalformedClause(e) => write!(f, "Malformed clause: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::Backjump => write!(f, "Backjump error"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Failures of analysis, each an internal error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Analysis ended without exactly one literal at the conflict level.
    NoAssertion,

    /// A literal required for resolution has no antecedent.
    MissingAntecedent,

    /// Resolution at level zero failed to derive the empty clause.
    IncompleteRefutation,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// An atom beyond [ATOM_MAX](crate::structures::atom::ATOM_MAX) was requested.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Results of propagation which end a round of BCP.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// Every literal of the clause is false. Expected, and handled by analysis.
    Conflict(ClauseKey),

    /// A watch list cites a clause which does not watch the literal of the list.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Misuse of the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing.
    Missing,

    /// An attempt to remove an original clause.
    OriginalRemoval,

    /// An attempt to remove a clause which is the antecedent of some literal on the trail.
    LockedRemoval,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// A clause given to the solver which cannot be part of a formula.
///
/// The index is the position of the clause in the sequence of clauses given.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedClauseError {
    /// The clause contains the literal `0`.
    ZeroLiteral { clause: usize },

    /// The atom of some literal exceeds the declared count of atoms.
    AtomOutOfRange {
        clause: usize,
        literal: CLiteral,
        limit: Atom,
    },
}

impl std::fmt::Display for MalformedClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral { clause } => write!(f, "clause {clause} contains the literal 0"),
            Self::AtomOutOfRange {
                clause,
                literal,
                limit,
            } => write!(
                f,
                "clause {clause} contains {literal}, though only {limit} atoms were declared"
            ),
        }
    }
}

impl From<MalformedClauseError> for ErrorKind {
    fn from(e: MalformedClauseError) -> Self {
        ErrorKind::MalformedClause(e)
    }
}

/// Errors when parsing DIMACS input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The preamble of the formula is malformed.
    ProblemSpecification,

    /// The line at the given index could not be read.
    Line(usize),

    /// The token on the line at the given index is not a literal.
    Literal(usize, String),

    /// The last clause of the formula is not terminated by `0`.
    MissingDelimiter(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Line(line) => write!(f, "unable to read line {line}"),
            Self::Literal(line, token) => write!(f, "'{token}' on line {line} is not a literal"),
            Self::MissingDelimiter(line) => {
                write!(f, "the clause ending on line {line} is not terminated by 0")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from an operation made in the wrong state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// An attempt to add a clause during a solve.
    SolveInProgress,

    /// An attempt to add a clause after a solve.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
