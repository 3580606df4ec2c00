/*!
Methods for choosing the value of an atom.

# Overview

When propagation is exhausted without a conflict, some atom without a value is chosen and valued.
If there is no atom without a value, the valuation is complete, and as there was no conflict, the formula is satisfiable on the valuation.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Heuristics

## Activity

The atom chosen is the atom without a value with the highest activity, and of those atoms the lowest.
The [atom database](crate::db::atom) keeps atoms without a value on an [activity heap](crate::generic::index_heap), so the chosen atom is found by popping from the heap until an atom without a value is found.

## Phase saving

If phase saving is enabled and the chosen atom was previously valued *v*, the atom is again valued *v*.
Otherwise, the atom is valued true.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some decision was made, as a literal.
    Literal(CLiteral),

    /// Every atom has a value, and so no decision is possible.
    Exhausted,
}

impl Context {
    /// Chooses a literal for the next decision, if any atom lacks a value.
    ///
    /// For documentation see [procedures::decision](crate::procedures::decision).
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_db.most_active_unvalued() {
            None => DecisionOk::Exhausted,

            Some(atom) => {
                let polarity = match self.config.phase_saving.value {
                    true => self.atom_db.saved_phase(atom).unwrap_or(true),
                    false => true,
                };
                let decision = CLiteral::new(atom, polarity);
                log::trace!(target: targets::DECISION, "Decision {decision}");
                DecisionOk::Literal(decision)
            }
        }
    }
}
