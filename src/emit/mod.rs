// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Code family emitter.
//!
//! A converged search leaves the smallest pool plus the used stack. Restoring
//! the used entries one at a time, oldest first, grows the pool back to all
//! `C(m,t)` candidates; every intermediate pool is itself a valid code. The
//! family is the sequence of those pools, one per size `k`.
//!
//! Each pool becomes an [`EmittedCodeTable`] holding the two views of the
//! data-to-parity incidence structure:
//!
//! - `data_bms[i]`: the parities data element `i` feeds (the pool entry).
//! - `parity_bms[p]`: the data elements feeding parity `p`, as a bitmask
//!   over positions in the pool.
//!
//! Restored entries go at the tail, so the last table holds every candidate
//! in restore order rather than in the lexicographic order of enumeration.

pub mod writer;

pub use writer::{write_family, CDeclarations, Declaration, JsonLines, TableWriter};

use crate::params::CodeParams;
use crate::search::SearchOutcome;
use crate::sets::{Combination, DataSet, ParityIndex};

/// The incidence tables for one pool size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedCodeTable {
    params: CodeParams,
    data_bms: Vec<Combination>,
    parity_bms: Vec<DataSet>,
}

impl EmittedCodeTable {
    /// Build both views of the code formed by `pool`, in order.
    pub fn from_pool(params: CodeParams, pool: &[Combination]) -> Self {
        let mut parity_bms: Vec<DataSet> = (0..params.parities())
            .map(|_| DataSet::with_len(pool.len()))
            .collect();
        for (i, c) in pool.iter().enumerate() {
            for p in c.iter() {
                parity_bms[p.as_usize()].insert(i);
            }
        }
        Self {
            params,
            data_bms: pool.to_vec(),
            parity_bms,
        }
    }

    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// Number of data elements `k`.
    pub fn k(&self) -> usize {
        self.data_bms.len()
    }

    /// `"<k>_<m>_<hd>"`, the part shared by every C identifier for this table.
    pub fn name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.k(),
            self.params.parities(),
            self.params.hamming_distance()
        )
    }

    /// Parity memberships, one per data element.
    pub fn data_bms(&self) -> &[Combination] {
        &self.data_bms
    }

    /// Data memberships, one per parity.
    pub fn parity_bms(&self) -> &[DataSet] {
        &self.parity_bms
    }

    pub fn data_count(&self) -> usize {
        self.k()
    }

    /// How many data elements feed each parity.
    pub fn data_per_parity(&self) -> Vec<usize> {
        self.parity_bms.iter().map(DataSet::len).collect()
    }

    /// Check that the two views describe the same incidence structure and
    /// that every data element feeds exactly `t` parities.
    pub fn is_consistent(&self) -> bool {
        let arity = self.params.arity().get();
        if self.parity_bms.len() != self.params.parities()
            || self.parity_bms.iter().any(|row| row.capacity() != self.k())
            || self.data_bms.iter().any(|c| c.weight() != arity)
        {
            return false;
        }
        self.parity_bms.iter().enumerate().all(|(p, row)| {
            let Some(index) = ParityIndex::try_new(p) else {
                return false;
            };
            self.data_bms
                .iter()
                .enumerate()
                .all(|(i, c)| c.contains(index) == row.contains(i))
        })
    }
}

/// Every code reachable by restoring the used stack, smallest first.
#[derive(Debug, Clone)]
pub struct CodeFamily {
    params: CodeParams,
    /// The final pool followed by the used stack, oldest first.
    order: Vec<Combination>,
    /// Size of the final pool; the first table covers `order[..first_k]`.
    first_k: usize,
}

impl CodeFamily {
    pub fn from_outcome(outcome: SearchOutcome) -> Self {
        let params = outcome.params();
        let (pool, used) = outcome.into_parts();
        let mut order = pool.into_vec();
        let first_k = order.len();
        order.extend(used.into_vec());
        Self {
            params,
            order,
            first_k,
        }
    }

    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// Number of tables, always at least one.
    pub fn len(&self) -> usize {
        self.order.len() - self.first_k + 1
    }

    /// Smallest `k` in the family.
    pub fn first_k(&self) -> usize {
        self.first_k
    }

    /// Largest `k` in the family.
    pub fn last_k(&self) -> usize {
        self.order.len()
    }

    /// All candidates in restore order.
    pub fn restore_order(&self) -> &[Combination] {
        &self.order
    }

    /// The table for pool size `k`, if it is in the family.
    pub fn table(&self, k: usize) -> Option<EmittedCodeTable> {
        (self.first_k..=self.last_k())
            .contains(&k)
            .then(|| EmittedCodeTable::from_pool(self.params, &self.order[..k]))
    }

    /// Tables in ascending `k`, built on demand.
    pub fn tables(&self) -> impl Iterator<Item = EmittedCodeTable> + '_ {
        (self.first_k..=self.last_k())
            .map(move |k| EmittedCodeTable::from_pool(self.params, &self.order[..k]))
    }
}
