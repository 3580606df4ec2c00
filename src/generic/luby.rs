/*!
An iterator to generate the luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the luby sequence.

The sequence is generated by 'reluctant doubling', via a pair of numbers `(u, v)`:
the next pair is `(u + 1, 1)` if `u & -u == v`, and `(u, 2v)` otherwise, with `v` being the term of the sequence.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
#[derive(Clone, Debug)]
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
}

/// The default iterator is on the first element of the sequence.
impl Default for Luby {
    fn default() -> Self {
        let mut luby = Luby { u: 0, v: 0 };
        luby.next();
        luby
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.u & self.u.wrapping_neg() == self.v {
            self.u = self.u.checked_add(1)?;
            self.v = 1;
        } else {
            self.v = self.v.checked_add(self.v)?;
        }

        Some(self.v)
    }
}

impl Luby {
    /// The current term of the sequence.
    pub fn current(&self) -> LubyRepresentation {
        self.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32,
    ];

    #[test]
    fn oeis_prefix() {
        let mut luby = Luby { u: 0, v: 0 };
        for known_value in LUBY_SLICE {
            assert_eq!(luby.next(), Some(*known_value))
        }
    }

    #[test]
    fn default_is_on_first_term() {
        let mut luby = Luby::default();
        assert_eq!(luby.current(), 1);
        assert_eq!(luby.next(), Some(1));
        assert_eq!(luby.next(), Some(2));
        assert_eq!(luby.current(), 2);
    }
}
