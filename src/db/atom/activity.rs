use crate::{config::Activity, structures::atom::Atom};

use super::AtomDB;

impl AtomDB {
    /// Bumps the activities of each atom in the given iterator.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescaled.
    pub fn bump_activity(&mut self, atoms: impl Iterator<Item = Atom>) {
        for atom in atoms {
            let index = atom as usize;
            if self.activity_heap.value_at(index) + self.config.bump.value > self.config.bump.max {
                self.rescale_activity();
            }

            let bumped = self.activity_heap.value_at(index) + self.config.bump.value;
            self.activity_heap.revalue(index, bumped);
            self.activity_heap.heapify_if_active(index);
        }
    }

    /// Decays the activity of every atom, relative to future bumps.
    ///
    /// Rather than scaling every activity by the decay factor, the bump is scaled by the inverse of the factor.
    pub fn decay_activity(&mut self) {
        self.config.bump.value *= 1.0 / self.config.decay.value;
        if self.config.bump.value > self.config.bump.max {
            self.rescale_activity();
        }
    }

    /// Scales the activity of every atom and the bump to within `[0, 1]`, preserving order.
    fn rescale_activity(&mut self) {
        let mut max = self.config.bump.value;
        for index in 0..self.activity_heap.count() {
            max = Activity::max(max, *self.activity_heap.value_at(index));
        }

        let factor = 1.0 / max;
        self.config.bump.value *= factor;
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.activity_heap.heapify();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::*;

    #[test]
    fn decay_favours_recent_bumps() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..3 {
            let _ = atom_db.fresh_atom();
        }

        atom_db.bump_activity([1].into_iter());
        atom_db.decay_activity();
        atom_db.bump_activity([2].into_iter());

        assert!(atom_db.activity(2) > atom_db.activity(1));
        assert_eq!(atom_db.most_active_unvalued(), Some(2));
    }

    #[test]
    fn rescale_preserves_order() {
        let mut config = Config::default();
        config.atom_db.bump.max = 8.0;
        let mut atom_db = AtomDB::new(&config);
        for _ in 0..2 {
            let _ = atom_db.fresh_atom();
        }

        for _ in 0..10 {
            atom_db.bump_activity([1].into_iter());
            atom_db.decay_activity();
        }
        atom_db.bump_activity([2].into_iter());

        assert!(atom_db.activity(1) <= 8.0);
        assert!(atom_db.activity(1) > atom_db.activity(2));
    }
}
