// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ParityIndex type for parity slots.
//!
//! A code with `m` parities numbers its parity slots `0..m`. Every set
//! operation in the crate works over this universe.

use crate::sets::constants::MAX_PARITIES;
use std::fmt;

/// A parity slot in the range 0..MAX_PARITIES.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// parity indices with data indices, which are plain `usize` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParityIndex(u8);

impl ParityIndex {
    /// Create a new parity index, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_PARITIES`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < MAX_PARITIES,
            "ParityIndex out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new parity index, returning None if out of range.
    pub fn try_new(value: usize) -> Option<Self> {
        if value < MAX_PARITIES {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the index as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_new() {
        assert_eq!(ParityIndex::new(0).value(), 0);
        assert_eq!(ParityIndex::new(63).value(), 63);
    }

    #[test]
    #[should_panic(expected = "ParityIndex out of range")]
    fn test_parity_out_of_range() {
        ParityIndex::new(64);
    }

    #[test]
    fn test_parity_try_new() {
        assert!(ParityIndex::try_new(0).is_some());
        assert!(ParityIndex::try_new(63).is_some());
        assert!(ParityIndex::try_new(64).is_none());
    }

    #[test]
    fn test_parity_as_usize() {
        assert_eq!(ParityIndex::new(3).as_usize(), 3);
    }
}
