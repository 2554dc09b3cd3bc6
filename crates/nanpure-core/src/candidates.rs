//! Candidate digit sets for a single cell.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// The set of digits still possible for one cell, backed by a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9. Candidate sets only ever shrink while a
/// board is being solved; an empty set is how a contradiction shows up.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Candidates, Digit};
///
/// let mut candidates = Candidates::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
///
/// // A cell is fixed once a single candidate remains.
/// let fixed = Candidates::from_iter([Digit::D3]);
/// assert_eq!(fixed.as_single(), Some(Digit::D3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidates(u16);

const FULL_MASK: u16 = 0x1ff;

impl Candidates {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(FULL_MASK);

    /// Creates an empty candidate set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.index();
    }

    /// Removes a digit, returning `true` if it was present.
    ///
    /// Removing an absent digit is a no-op.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = 1 << digit.index();
        if self.0 & bit == 0 {
            return false;
        }
        self.0 &= !bit;
        true
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no digit remains.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if exactly one remains, `None` otherwise.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Digit::from_value(value)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Digit> for Candidates {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for Candidates {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl BitOr for Candidates {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Candidates {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Candidates {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Candidates {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`Candidates`] set, ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Digit::from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = Candidates::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        assert!(set.remove(D1));
        assert!(!set.remove(D1), "second removal is a no-op");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Candidates::EMPTY.len(), 0);
        assert!(Candidates::EMPTY.is_empty());
        assert_eq!(Candidates::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(Candidates::FULL.contains(digit));
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(Candidates::EMPTY.as_single(), None);
        assert_eq!(Candidates::FULL.as_single(), None);
        assert_eq!(Candidates::from_iter([D4]).as_single(), Some(D4));
        assert_eq!(Candidates::from_iter([D4, D7]).as_single(), None);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = Candidates::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_bit_operators() {
        let a = Candidates::from_iter([D1, D2, D3]);
        let b = Candidates::from_iter([D2, D3, D4]);
        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
    }

    #[test]
    fn test_display() {
        let set = Candidates::from_iter([D2, D8]);
        assert_eq!(set.to_string(), "{2 8}");
        assert_eq!(Candidates::EMPTY.to_string(), "{}");
    }
}
