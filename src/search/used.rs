// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The used stack: the undo log of the coverage search.
//!
//! Every selection is pushed here and every backtrack pops the most recent
//! one. After the search converges, the stack read from the bottom up is
//! the order in which the code family emitter restores candidates.
//!
//! Unlike a checkpointing trail, nothing is rewound in bulk: each backtrack
//! undoes exactly one selection, and what it restores (the candidate's
//! parity bits) is derived from the entry itself.

use crate::sets::Combination;

/// Last-in-first-out record of selected candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedStack {
    entries: Vec<Combination>,
}

impl UsedStack {
    /// Create an empty stack with room for `capacity` selections.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record a selection.
    pub fn push(&mut self, candidate: Combination) {
        self.entries.push(candidate);
    }

    /// Undo the most recent selection, if any.
    pub fn pop(&mut self) -> Option<Combination> {
        self.entries.pop()
    }

    /// Number of selections currently recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no selection is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selections from oldest to newest.
    pub fn as_slice(&self) -> &[Combination] {
        &self.entries
    }

    /// Iterate over selections from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Combination> + '_ {
        self.entries.iter().copied()
    }

    /// Consume the stack, returning selections from oldest to newest.
    pub fn into_vec(self) -> Vec<Combination> {
        self.entries
    }
}
