// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ParitySet type for representing sets of parity slots as bitsets.
//!
//! A ParitySet is a compact representation of a set of parity indices using
//! a bitset, where bit i represents the presence of parity i. The coverage
//! mask of the search and every candidate combination are ParitySets.
//!
//! # Examples
//!
//! ```
//! use goldilocks_codes::sets::{ParityIndex, ParitySet};
//!
//! let mut set = ParitySet::empty();
//! set.insert(ParityIndex::new(0));
//! set.insert(ParityIndex::new(2));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.bits(), 5);
//! assert_eq!(format!("{}", set), "{0, 2}");
//! assert!(set.is_subset(ParitySet::full(3)));
//! ```

use crate::sets::constants::MAX_PARITIES;
use crate::sets::ParityIndex;
use std::fmt;

/// A set of parity indices represented as a bitset.
///
/// Bit i (counting from LSB) is set if parity i is in the set.
/// This provides O(1) insert, remove, contains and subset tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParitySet(u64);

impl ParitySet {
    /// Create an empty parity set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a parity set containing every parity in `0..parities`.
    ///
    /// # Panics
    ///
    /// Panics if `parities > MAX_PARITIES`.
    pub fn full(parities: usize) -> Self {
        assert!(
            parities <= MAX_PARITIES,
            "Parity count out of range: {} > {}",
            parities,
            MAX_PARITIES
        );
        if parities == MAX_PARITIES {
            Self(u64::MAX)
        } else {
            Self((1u64 << parities) - 1)
        }
    }

    /// Create a parity set from a slice of parity indices.
    pub fn from_indices(indices: &[ParityIndex]) -> Self {
        let mut set = Self::empty();
        for &index in indices {
            set.insert(index);
        }
        set
    }

    /// Create a parity set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific parity.
    pub fn contains(self, index: ParityIndex) -> bool {
        (self.0 >> index.value()) & 1 != 0
    }

    /// Insert a parity into the set.
    pub fn insert(&mut self, index: ParityIndex) {
        self.0 |= 1 << index.value();
    }

    /// Remove a parity from the set.
    pub fn remove(&mut self, index: ParityIndex) {
        self.0 &= !(1 << index.value());
    }

    /// True iff every member of `self` is also in `other` (`self & other == self`).
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Members common to both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Members of either set.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Members of exactly one of the two sets.
    pub fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Members of `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Get the number of parities in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all parities in the set.
    ///
    /// Parities are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = ParityIndex> {
        ParitySetIter { bits: self.0 }
    }

    /// Decode the set into its members, sorted ascending.
    pub fn to_indices(self) -> Vec<ParityIndex> {
        self.iter().collect()
    }
}

/// Iterator over parities in a ParitySet.
struct ParitySetIter {
    bits: u64,
}

impl Iterator for ParitySetIter {
    type Item = ParityIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.bits &= self.bits - 1;
        Some(ParityIndex::new(idx))
    }
}

impl fmt::Display for ParitySet {
    /// Format a parity set as "{0, 2, 5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for index in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl From<&[ParityIndex]> for ParitySet {
    fn from(indices: &[ParityIndex]) -> Self {
        Self::from_indices(indices)
    }
}
