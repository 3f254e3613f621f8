// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate enumeration.
//!
//! Produces the initial candidate pool: every `t`-element subset of the
//! parities `0..m`, encoded as a bitmask.
//!
//! # Ordering
//!
//! Candidates are generated in lexicographic order of their sorted index
//! tuples: `(0,1), (0,2), (0,3), (1,2), ...`. The coverage search scans the
//! pool front to back and takes the first match, so this order decides the
//! whole trajectory of the search and must not change.
//!
//! # Example
//!
//! For m=4, t=2 we generate 6 candidates:
//! - {0,1}=3, {0,2}=5, {0,3}=9, {1,2}=6, {1,3}=10, {2,3}=12

use crate::params::CodeParams;
use crate::sets::{Combination, ParityIndex};

/// Generate all C(m, t) candidates in lexicographic order.
pub fn enumerate(params: &CodeParams) -> Vec<Combination> {
    let mut candidates = Vec::with_capacity(params.candidate_count());
    candidates.extend(tuples(params.parities(), params.arity().get()).map(|t| to_combination(&t)));
    debug_assert_eq!(candidates.len(), params.candidate_count());
    candidates
}

/// Strictly increasing `size`-tuples over `0..n`, in lexicographic order.
///
/// Yields nothing when `size > n`, and a single empty tuple when `size == 0`.
pub fn tuples(n: usize, size: usize) -> Tuples {
    Tuples {
        n,
        next: (size <= n).then(|| (0..size).collect()),
    }
}

/// Iterator returned by [`tuples`].
#[derive(Debug, Clone)]
pub struct Tuples {
    n: usize,
    next: Option<Vec<usize>>,
}

impl Iterator for Tuples {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let size = current.len();
        // Find the rightmost position that can still be advanced.
        if let Some(pos) = (0..size).rev().find(|&i| current[i] < self.n - size + i) {
            let mut tuple = current.clone();
            tuple[pos] += 1;
            for i in pos + 1..size {
                tuple[i] = tuple[i - 1] + 1;
            }
            self.next = Some(tuple);
        }
        Some(current)
    }
}

fn to_combination(tuple: &[usize]) -> Combination {
    let indices: Vec<ParityIndex> = tuple
        .iter()
        .map(|&i| ParityIndex::new(i as u8))
        .collect();
    Combination::from_indices(&indices)
}
