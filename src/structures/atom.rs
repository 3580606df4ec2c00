/*!
Atoms, the variables of a formula.

Atoms are represented by unsigned integers, so that an atom may be used directly as an index to the structures of a [context](crate::context).

Atom `0` is reserved as a placeholder, as it has no literal form, and so the atoms of a formula are `1..=N`.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The largest atom which has a literal representation.
pub const ATOM_MAX: Atom = i32::MAX as Atom;
