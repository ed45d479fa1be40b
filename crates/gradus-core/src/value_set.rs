//! A bit-set of small positive integers, used for candidates and notes.
//!
//! [`ValueSet`] stores values in the range 1-31 in a single `u32`. Grids use
//! it both for solver candidates and for user-entered pencil notes; the grid
//! itself enforces the tighter `1..=size` range.
//!
//! # Examples
//!
//! ```
//! use gradus_core::ValueSet;
//!
//! let mut set = ValueSet::new();
//! set.insert(1);
//! set.insert(5);
//! set.insert(9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(5));
//! ```

use std::fmt;

/// Largest value a [`ValueSet`] can hold.
pub const MAX_VALUE: u8 = 31;

/// A set of values in the range 1-31, represented as a `u32` bitmask.
///
/// Iteration and [`FromIterator`] run in ascending value order, which keeps
/// every consumer of the set deterministic.
///
/// # Set Operations
///
/// ```
/// use gradus_core::ValueSet;
///
/// let a = ValueSet::from_iter([1, 2, 3]);
/// let b = ValueSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a.union(b), ValueSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a.intersection(b), ValueSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), ValueSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValueSet {
    bits: u32,
}

impl ValueSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set containing every value from 1 to `max` inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `max` exceeds [`MAX_VALUE`].
    #[must_use]
    pub fn full_up_to(max: u8) -> Self {
        assert!(
            max <= MAX_VALUE,
            "value must be between 1 and {MAX_VALUE}, got {max}"
        );
        if max == 0 {
            return Self::EMPTY;
        }
        #[expect(clippy::cast_possible_truncation)]
        let bits = ((1_u64 << (u64::from(max) + 1)) - 2) as u32;
        Self { bits }
    }

    fn mask(value: u8) -> u32 {
        assert!(
            (1..=MAX_VALUE).contains(&value),
            "value must be between 1 and {MAX_VALUE}, got {value}"
        );
        1 << value
    }

    /// Inserts a value, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1..=[`MAX_VALUE`].
    pub fn insert(&mut self, value: u8) -> bool {
        let mask = Self::mask(value);
        let inserted = self.bits & mask == 0;
        self.bits |= mask;
        inserted
    }

    /// Removes a value, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1..=[`MAX_VALUE`].
    pub fn remove(&mut self, value: u8) -> bool {
        let mask = Self::mask(value);
        let removed = self.bits & mask != 0;
        self.bits &= !mask;
        removed
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// Out-of-range values are never contained.
    #[inline]
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= 1 && value <= MAX_VALUE && self.bits & (1 << value) != 0
    }

    /// Removes every value from the set.
    #[inline]
    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns the number of values in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole value if the set is a singleton.
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(self.bits.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Returns the union of both sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of both sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns `true` if every value of `other` is contained in `self`.
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Iterates over the contained values in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ValueSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the values of a [`ValueSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let value = self.bits.trailing_zeros();
        self.bits &= !(1 << value);
        #[expect(clippy::cast_possible_truncation)]
        Some(value as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl std::iter::FusedIterator for Iter {}
