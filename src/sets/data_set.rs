// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DataSet type for representing sets of data indices as bitsets.
//!
//! A DataSet records which data elements feed one parity equation: bit i is
//! set if the data element at position i of the pool contributes to the
//! parity. The pool can hold up to C(m, t) elements, which for realistic
//! codes exceeds 64 (C(16, 2) = 120), so the set spans multiple u64 words.
//!
//! # Examples
//!
//! ```
//! use goldilocks_codes::sets::DataSet;
//!
//! let mut set = DataSet::with_len(70);
//! set.insert(0);
//! set.insert(64);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.to_string(), "18446744073709551617");
//! ```

use std::fmt;

use num_bigint::BigUint;

/// A set of data indices represented as a multi-word bitset.
///
/// The capacity is fixed at construction; bit i lives in word i / 64.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataSet {
    words: Vec<u64>,
    capacity: usize,
}

impl DataSet {
    /// Create an empty set able to hold indices `0..capacity`.
    pub fn with_len(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Number of indices this set can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the set contains a specific data index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn contains(&self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "DataIndex out of range: {} >= {}",
            index,
            self.capacity
        );
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Insert a data index into the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) {
        assert!(
            index < self.capacity,
            "DataIndex out of range: {} >= {}",
            index,
            self.capacity
        );
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Get the number of data indices in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Get the underlying words, least significant first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The set as a single integer, if every member is below 64.
    pub fn to_u64(&self) -> Option<u64> {
        match self.words.split_first() {
            None => Some(0),
            Some((&low, rest)) if rest.iter().all(|&w| w == 0) => Some(low),
            Some(_) => None,
        }
    }

    /// Iterate over all data indices in the set, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(word_idx * 64 + bit)
            })
        })
    }

    /// The bitmask as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        let digits: Vec<u32> = self
            .words
            .iter()
            .flat_map(|&w| [w as u32, (w >> 32) as u32])
            .collect();
        BigUint::from_slice(&digits)
    }

    /// Render the set as the exact decimal value of its bitmask.
    pub fn to_decimal(&self) -> String {
        self.to_biguint().to_string()
    }
}

impl fmt::Display for DataSet {
    /// Format a data set as the decimal value of its bitmask.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}
