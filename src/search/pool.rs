// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ordered candidate pool.
//!
//! The pool behaves like a work queue with arbitrary removal: the search
//! scans it from the front, splices out the first candidate that matches,
//! and appends undone selections at the back. The position of a candidate
//! is observable, both in the search trajectory and as the DataIndex of
//! the emitted tables, so the pool is never reordered any other way.

use crate::sets::Combination;

/// Ordered sequence of candidates with first-match removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    entries: Vec<Combination>,
}

impl CandidatePool {
    /// Create a pool holding `candidates` in the given order.
    pub fn new(candidates: Vec<Combination>) -> Self {
        Self {
            entries: candidates,
        }
    }

    /// Remove and return the first candidate satisfying `pred`.
    ///
    /// Later candidates keep their relative order.
    pub fn take_first<F>(&mut self, pred: F) -> Option<Combination>
    where
        F: Fn(Combination) -> bool,
    {
        let pos = self.entries.iter().position(|&c| pred(c))?;
        Some(self.entries.remove(pos))
    }

    /// Append a candidate at the back of the scan order.
    pub fn push_back(&mut self, candidate: Combination) {
        self.entries.push(candidate);
    }

    /// Number of candidates in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The candidates in scan order.
    pub fn as_slice(&self) -> &[Combination] {
        &self.entries
    }

    /// Iterate over candidates in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Combination> + '_ {
        self.entries.iter().copied()
    }

    /// Consume the pool, returning the candidates in scan order.
    pub fn into_vec(self) -> Vec<Combination> {
        self.entries
    }
}
