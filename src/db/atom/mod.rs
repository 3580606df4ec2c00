/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation), and the last value of each atom, for phase saving.
- The position on the [trail](crate::db::trail) of the assignment which valued an atom, if any.
- An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.
*/

mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        valuation::{LiteralStatus, VValuation, Valuation},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Clone, Debug)]
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: VValuation,

    /// The last value of each atom, if the atom has been valued.
    previous_valuation: Vec<Option<bool>>,

    /// The position on the trail of the assignment which valued an atom, if the atom has a value.
    trail_positions: Vec<Option<usize>>,

    /// An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.
    activity_heap: IndexHeap<Activity>,

    /// A local configuration, derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    ///
    /// The database contains the reserved atom `0`, which is valued true and never a candidate for a decision.
    pub fn new(config: &Config) -> Self {
        let mut activity_heap = IndexHeap::default();
        activity_heap.add(0, Activity::default());

        AtomDB {
            valuation: vec![Some(true)],
            previous_valuation: vec![Some(true)],
            trail_positions: vec![None],
            activity_heap,
            config: config.atom_db.clone(),
        }
    }

    /// A fresh atom, with no value and no activity.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.valuation.len() as Atom;
        if atom > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted);
        }

        self.valuation.push(None);
        self.previous_valuation.push(None);
        self.trail_positions.push(None);
        self.activity_heap.add(atom as usize, Activity::default());
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// A count of atoms in the database, excluding the reserved atom.
    pub fn count(&self) -> Atom {
        (self.valuation.len() - 1) as Atom
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &VValuation {
        &self.valuation
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The status of `literal` on the current valuation.
    pub fn literal_status(&self, literal: CLiteral) -> LiteralStatus {
        self.valuation.literal_status(literal)
    }

    /// The last value of `atom`, if `atom` has ever been valued.
    pub fn saved_phase(&self, atom: Atom) -> Option<bool> {
        self.previous_valuation.get(atom as usize).copied().flatten()
    }

    /// The position on the trail of the assignment which valued `atom`, if `atom` has a value.
    pub fn trail_position(&self, atom: Atom) -> Option<usize> {
        self.trail_positions.get(atom as usize).copied().flatten()
    }

    /// Values the atom of `literal` to the polarity of `literal`, noting the position of the assignment on the trail.
    ///
    /// The atom is removed from the activity heap, as it is no longer a candidate for a decision.
    pub fn set_value(&mut self, literal: CLiteral, trail_position: usize) {
        let atom = literal.atom() as usize;
        log::trace!(target: targets::VALUATION, "Set {literal}");
        self.valuation[atom] = Some(literal.polarity());
        self.trail_positions[atom] = Some(trail_position);
        self.activity_heap.remove(atom);
    }

    /// Clears the value of `atom`, saving the value as the phase of the atom.
    ///
    /// The atom is returned to the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let atom = atom as usize;
        self.previous_valuation[atom] = self.valuation[atom];
        self.valuation[atom] = None;
        self.trail_positions[atom] = None;
        self.activity_heap.activate(atom);
    }

    /// The unvalued atom with the highest activity, if any, with ties broken by lowest atom.
    ///
    /// Any valued atoms found on the activity heap along the way are removed from the heap.
    pub fn most_active_unvalued(&mut self) -> Option<Atom> {
        while let Some(index) = self.activity_heap.pop_max() {
            let atom = index as Atom;
            if self.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }

    /// The current activity of `atom`.
    pub fn activity(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_db(atoms: Atom) -> AtomDB {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..atoms {
            assert!(atom_db.fresh_atom().is_ok());
        }
        atom_db
    }

    #[test]
    fn values_and_phases() {
        let mut atom_db = fresh_db(3);
        assert_eq!(atom_db.count(), 3);

        atom_db.set_value(-2, 0);
        assert_eq!(atom_db.value_of(2), Some(false));
        assert_eq!(atom_db.trail_position(2), Some(0));
        assert_eq!(atom_db.literal_status(2), LiteralStatus::Falsified);

        atom_db.drop_value(2);
        assert_eq!(atom_db.value_of(2), None);
        assert_eq!(atom_db.saved_phase(2), Some(false));
        assert_eq!(atom_db.saved_phase(3), None);
    }

    #[test]
    fn most_active_prefers_lowest_atom_on_ties() {
        let mut atom_db = fresh_db(4);
        assert_eq!(atom_db.most_active_unvalued(), Some(1));

        let mut atom_db = fresh_db(4);
        atom_db.bump_activity([3].into_iter());
        atom_db.set_value(1, 0);
        assert_eq!(atom_db.most_active_unvalued(), Some(3));
        assert_eq!(atom_db.most_active_unvalued(), Some(2));
        assert_eq!(atom_db.most_active_unvalued(), Some(4));
        assert_eq!(atom_db.most_active_unvalued(), None);
    }
}
