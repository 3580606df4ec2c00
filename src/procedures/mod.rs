/*!
Procedures used during a solve.

Each procedure is a method on a [Context](crate::context::Context):

- [bcp] and [propagate](crate::context::Context::propagate): boolean constraint propagation to a fixpoint.
- [analysis]: derivation of an asserting clause from a conflict, or of the empty clause from a conflict at level zero.
- [backjump]: undoing assignments above a level.
- [decision]: choosing an atom and value when propagation is exhausted.
- [reduction]: removal of learned clauses, by subsumption or forgetting.
- [solve]: the state machine tying the above together.
*/

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod reduction;
pub mod solve;
