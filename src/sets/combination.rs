// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination type: one candidate parity equation membership.
//!
//! A combination names the `t` parities that a single data element feeds.
//! It is the unit the coverage search moves between the candidate pool and
//! the used stack, and it becomes one entry of an emitted `data_bms` table.

use crate::sets::{ParityIndex, ParitySet};
use std::fmt;

/// An immutable set of parity indices of fixed weight.
///
/// The weight is checked at construction against the arity of the code;
/// after that a combination is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination(ParitySet);

impl Combination {
    /// Build a combination from its members.
    ///
    /// Duplicate indices collapse, so the weight is the number of
    /// distinct members. Callers outside the crate go through
    /// [`Combination::with_arity`], which checks the weight.
    pub(crate) fn from_indices(indices: &[ParityIndex]) -> Self {
        Self(ParitySet::from_indices(indices))
    }

    /// Wrap a parity set, returning None unless it has exactly `arity` members.
    pub fn with_arity(set: ParitySet, arity: usize) -> Option<Self> {
        if set.len() == arity {
            Some(Self(set))
        } else {
            None
        }
    }

    /// The members as a parity set.
    pub fn set(self) -> ParitySet {
        self.0
    }

    /// The raw bitmask, as emitted in `data_bms`.
    pub fn bits(self) -> u64 {
        self.0.bits()
    }

    /// Number of members.
    pub fn weight(self) -> usize {
        self.0.len()
    }

    /// Check whether the combination feeds the given parity.
    pub fn contains(self, index: ParityIndex) -> bool {
        self.0.contains(index)
    }

    /// Iterate over members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = ParityIndex> {
        self.0.iter()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
