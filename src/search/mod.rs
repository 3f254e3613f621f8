// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coverage search engine.
//!
//! This module reduces the candidate pool, one selection at a time, until it
//! holds no more candidates than there are parities. The selected candidates
//! go on the used stack; their restore order later drives the code family
//! emitter.
//!
//! # Rules
//!
//! The state is the ordered pool, the used stack and the set of parities
//! still `needed` (initially all of them). Each step applies exactly one of:
//!
//! 1. **Cover**: when at least `t` parities are needed, take the first
//!    candidate lying entirely inside `needed` and remove its parities.
//! 2. **Roll over**: when fewer than `t` parities are needed, take the first
//!    candidate containing all of them. Its surplus parities start the next
//!    round, so `needed` becomes every parity except that surplus.
//! 3. **Backtrack**: when no candidate qualifies, pop the most recent
//!    selection, append it to the tail of the pool, and add its parities
//!    back to `needed`.
//!
//! Scans always take the first match, so the result depends on pool order.
//! The search is deterministic: a repeated state means it loops forever,
//! which is reported as [`SearchError::Oscillating`] rather than spinning.
//!
//! # Example
//!
//! ```
//! use goldilocks_codes::params::CodeParams;
//! use goldilocks_codes::search::{CoverageSearch, SearchLimits};
//!
//! let params = CodeParams::new(4, 2).unwrap();
//! let outcome = CoverageSearch::new(params, SearchLimits::default()).run().unwrap();
//! let pool: Vec<u64> = outcome.pool().iter().map(|c| c.bits()).collect();
//! assert_eq!(pool, vec![5, 9, 6, 10]);
//! ```

pub mod oscillation;
pub mod pool;
pub mod used;

pub use oscillation::OscillationDetector;
pub use pool::CandidatePool;
pub use used::UsedStack;

use tracing::{debug, info, trace};

use crate::candidates;
use crate::error::{ParamsError, SearchError};
use crate::params::CodeParams;
use crate::sets::{Combination, ParitySet};
use crate::statistics::{Counters, Statistics};

/// Default bound on search steps.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Bounds on how long a search may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Fail with [`SearchError::StepLimitExceeded`] after this many steps.
    pub max_steps: Option<u64>,
    /// Fail with [`SearchError::Oscillating`] as soon as a state repeats.
    pub detect_oscillation: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
            detect_oscillation: true,
        }
    }
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Selected a candidate inside the needed set.
    Covered(Combination),
    /// Selected a candidate containing the needed set.
    RolledOver(Combination),
    /// Returned the most recent selection to the pool tail.
    Backtracked(Combination),
    /// Nothing to do: the pool is already down to `min(m, C(m,t))`.
    Converged,
}

/// Everything a step depends on. Two equal states have equal futures.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchState {
    pool: CandidatePool,
    used: UsedStack,
    needed: ParitySet,
}

/// Result of a converged search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    params: CodeParams,
    pool: CandidatePool,
    used: UsedStack,
    statistics: Statistics,
}

impl SearchOutcome {
    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// The final, smallest pool.
    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Selections still in force, oldest first.
    pub fn used(&self) -> &UsedStack {
        &self.used
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Split into the final pool and the used stack.
    pub fn into_parts(self) -> (CandidatePool, UsedStack) {
        (self.pool, self.used)
    }
}

/// Coverage search over one candidate pool.
///
/// The search is consumed by [`CoverageSearch::run`]. Single steps can be
/// driven with [`CoverageSearch::step`] to observe the trajectory.
pub struct CoverageSearch {
    params: CodeParams,
    limits: SearchLimits,
    state: SearchState,
    /// Number of candidates the search started with.
    total: usize,
    statistics: Statistics,
    detector: Option<OscillationDetector<SearchState>>,
}

impl CoverageSearch {
    /// Search the full lexicographic candidate pool for `params`.
    pub fn new(params: CodeParams, limits: SearchLimits) -> Self {
        Self::build(params, candidates::enumerate(&params), limits)
    }

    /// Search a caller-supplied pool, in the order given.
    ///
    /// Every candidate must have weight `t` and lie within the `m` parities.
    /// Duplicates are allowed.
    pub fn with_candidates(
        params: CodeParams,
        candidates: Vec<Combination>,
        limits: SearchLimits,
    ) -> Result<Self, ParamsError> {
        let arity = params.arity().get();
        let full = params.full_mask();
        if let Some(bad) = candidates
            .iter()
            .find(|c| c.weight() != arity || !c.set().is_subset(full))
        {
            return Err(ParamsError::InvalidCandidate {
                bits: bad.bits(),
                arity,
                parities: params.parities(),
            });
        }
        Ok(Self::build(params, candidates, limits))
    }

    fn build(params: CodeParams, candidates: Vec<Combination>, limits: SearchLimits) -> Self {
        let total = candidates.len();
        let state = SearchState {
            pool: CandidatePool::new(candidates),
            used: UsedStack::with_capacity(total),
            needed: params.full_mask(),
        };
        let detector = limits
            .detect_oscillation
            .then(|| OscillationDetector::new(state.clone()));
        Self {
            params,
            limits,
            state,
            total,
            statistics: Statistics::new(),
            detector,
        }
    }

    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// The pool in its current order.
    pub fn pool(&self) -> &CandidatePool {
        &self.state.pool
    }

    /// Current selections, oldest first.
    pub fn used(&self) -> &UsedStack {
        &self.state.used
    }

    /// Parities not yet covered in the current round.
    pub fn needed(&self) -> ParitySet {
        self.state.needed
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// True once the pool is no larger than the number of parities.
    pub fn is_converged(&self) -> bool {
        self.state.pool.len() <= self.params.parities()
    }

    /// Apply one rule to the state.
    ///
    /// A converged search is left untouched and reports
    /// [`StepOutcome::Converged`].
    pub fn step(&mut self) -> Result<StepOutcome, SearchError> {
        if self.is_converged() {
            return Ok(StepOutcome::Converged);
        }
        self.statistics.increment_counter(Counters::Steps);
        let step = self.statistics.get(Counters::Steps);
        let state = &mut self.state;
        let needed = state.needed;

        let outcome = if needed.len() >= self.params.arity().get() {
            match state.pool.take_first(|c| c.set().is_subset(needed)) {
                Some(c) => {
                    state.needed = needed.symmetric_difference(c.set());
                    state.used.push(c);
                    self.statistics.increment_counter(Counters::CoverSelections);
                    StepOutcome::Covered(c)
                }
                None => Self::backtrack(state, step)?,
            }
        } else {
            match state.pool.take_first(|c| needed.is_subset(c.set())) {
                Some(c) => {
                    let extra = c.set().difference(needed);
                    state.needed = self.params.full_mask().symmetric_difference(extra);
                    state.used.push(c);
                    self.statistics
                        .increment_counter(Counters::RolloverSelections);
                    StepOutcome::RolledOver(c)
                }
                None => Self::backtrack(state, step)?,
            }
        };

        debug_assert_eq!(state.pool.len() + state.used.len(), self.total);
        debug_assert!(state.needed.is_subset(self.params.full_mask()));

        if let StepOutcome::Backtracked(c) = outcome {
            self.statistics.increment_counter(Counters::Backtracks);
            debug!(step, undone = %c, pool = state.pool.len(), "backtrack");
        }
        self.statistics.record_depth(state.used.len());
        trace!(
            step,
            ?outcome,
            needed = %state.needed,
            pool = state.pool.len(),
            used = state.used.len(),
            "search step"
        );

        if let Some(detector) = self.detector.as_mut() {
            if let Some(period) = detector.observe(&self.state) {
                return Err(SearchError::Oscillating { step, period });
            }
        }
        Ok(outcome)
    }

    fn backtrack(state: &mut SearchState, step: u64) -> Result<StepOutcome, SearchError> {
        let prev = state.used.pop().ok_or(SearchError::Exhausted { step })?;
        state.pool.push_back(prev);
        state.needed = state.needed.union(prev.set());
        Ok(StepOutcome::Backtracked(prev))
    }

    /// Step until the pool has shrunk to `min(m, C(m,t))` candidates.
    pub fn run(mut self) -> Result<SearchOutcome, SearchError> {
        while !self.is_converged() {
            if let Some(limit) = self.limits.max_steps {
                if self.statistics.get(Counters::Steps) >= limit {
                    return Err(SearchError::StepLimitExceeded { limit });
                }
            }
            self.step()?;
        }
        info!(
            params = %self.params,
            pool = self.state.pool.len(),
            used = self.state.used.len(),
            statistics = %self.statistics,
            "search converged"
        );
        Ok(SearchOutcome {
            params: self.params,
            pool: self.state.pool,
            used: self.state.used,
            statistics: self.statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(bits: &[u64], arity: usize) -> Vec<Combination> {
        bits.iter()
            .map(|&b| Combination::with_arity(ParitySet::from_bits(b), arity).unwrap())
            .collect()
    }

    fn pool_bits(pool: &CandidatePool) -> Vec<u64> {
        pool.iter().map(|c| c.bits()).collect()
    }

    #[test]
    fn test_four_two_trajectory() {
        let params = CodeParams::new(4, 2).unwrap();
        let mut search = CoverageSearch::new(params, SearchLimits::default());

        let first = search.step().unwrap();
        assert_eq!(first, StepOutcome::Covered(combos(&[3], 2)[0]));
        assert_eq!(search.needed().bits(), 12);

        let second = search.step().unwrap();
        assert_eq!(second, StepOutcome::Covered(combos(&[12], 2)[0]));
        assert!(search.needed().is_empty());
        assert!(search.is_converged());
        assert_eq!(pool_bits(search.pool()), vec![5, 9, 6, 10]);
    }

    #[test]
    fn test_step_after_convergence_is_a_no_op() {
        let params = CodeParams::new(4, 2).unwrap();
        let mut search = CoverageSearch::new(params, SearchLimits::default());
        while !search.is_converged() {
            search.step().unwrap();
        }
        let pool = search.pool().clone();
        let used = search.used().clone();
        assert_eq!(search.step(), Ok(StepOutcome::Converged));
        assert_eq!(search.pool(), &pool);
        assert_eq!(search.used(), &used);
        assert_eq!(search.pool().len(), 4);
        assert_eq!(search.statistics().get(Counters::Steps), 2);
    }

    #[test]
    fn test_rollover_sets_needed_to_complement_of_surplus() {
        // m=5: after {0,1} and {2,3} only parity 4 is needed.
        let params = CodeParams::new(5, 2).unwrap();
        let mut search = CoverageSearch::new(params, SearchLimits::default());
        search.step().unwrap();
        search.step().unwrap();
        assert_eq!(search.needed().bits(), 0b10000);

        let outcome = search.step().unwrap();
        // First candidate containing 4 is {0,4}; surplus {0}.
        assert_eq!(outcome, StepOutcome::RolledOver(combos(&[17], 2)[0]));
        assert_eq!(search.needed().bits(), 0b11110);
    }

    #[test]
    fn test_backtrack_appends_to_tail() {
        let params = CodeParams::new(6, 2).unwrap();
        let mut search = CoverageSearch::new(params, SearchLimits::default());
        let mut backtracked = None;
        while !search.is_converged() {
            if let StepOutcome::Backtracked(c) = search.step().unwrap() {
                backtracked = Some(c);
                break;
            }
        }
        let c = backtracked.expect("m=6 t=2 backtracks");
        assert_eq!(search.pool().as_slice().last(), Some(&c));
        assert!(c.set().is_subset(search.needed()));
    }

    #[test]
    fn test_converges_with_statistics() {
        let params = CodeParams::new(6, 2).unwrap();
        let outcome = CoverageSearch::new(params, SearchLimits::default())
            .run()
            .unwrap();
        let stats = outcome.statistics();
        assert_eq!(stats.get(Counters::Steps), 13);
        assert_eq!(stats.get(Counters::Backtracks), 2);
        assert_eq!(
            stats.get(Counters::CoverSelections) + stats.get(Counters::RolloverSelections),
            11
        );
        assert_eq!(outcome.pool().len(), 6);
        assert_eq!(outcome.used().len(), 9);
    }

    #[test]
    fn test_small_pool_needs_no_steps() {
        let params = CodeParams::new(3, 2).unwrap();
        let outcome = CoverageSearch::new(params, SearchLimits::default())
            .run()
            .unwrap();
        assert_eq!(outcome.statistics().get(Counters::Steps), 0);
        assert_eq!(pool_bits(outcome.pool()), vec![3, 5, 6]);
        assert!(outcome.used().is_empty());
    }

    #[test]
    fn test_exhausted_when_nothing_to_undo() {
        let params = CodeParams::new(3, 2).unwrap();
        let mut search = CoverageSearch::with_candidates(
            params,
            combos(&[5, 5, 5, 5], 2),
            SearchLimits::default(),
        )
        .unwrap();
        // Only parity 1 needed, and no candidate contains it.
        search.state.needed = ParitySet::from_bits(0b010);
        assert_eq!(search.step(), Err(SearchError::Exhausted { step: 1 }));
    }

    #[test]
    fn test_oscillation_detected() {
        let params = CodeParams::new(9, 2).unwrap();
        let err = CoverageSearch::new(params, SearchLimits::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, SearchError::Oscillating { period: 4, .. }));
    }

    #[test]
    fn test_step_limit() {
        let params = CodeParams::new(6, 2).unwrap();
        let limits = SearchLimits {
            max_steps: Some(12),
            detect_oscillation: true,
        };
        assert_eq!(
            CoverageSearch::new(params, limits).run().unwrap_err(),
            SearchError::StepLimitExceeded { limit: 12 }
        );

        let limits = SearchLimits {
            max_steps: Some(13),
            detect_oscillation: true,
        };
        assert!(CoverageSearch::new(params, limits).run().is_ok());
    }

    #[test]
    fn test_oscillation_without_detector_hits_step_limit() {
        let params = CodeParams::new(9, 2).unwrap();
        let limits = SearchLimits {
            max_steps: Some(500),
            detect_oscillation: false,
        };
        assert_eq!(
            CoverageSearch::new(params, limits).run().unwrap_err(),
            SearchError::StepLimitExceeded { limit: 500 }
        );
    }

    #[test]
    fn test_rejects_wrong_weight() {
        let params = CodeParams::new(4, 2).unwrap();
        let bad = vec![Combination::with_arity(ParitySet::from_bits(7), 3).unwrap()];
        assert_eq!(
            CoverageSearch::with_candidates(params, bad, SearchLimits::default()).err(),
            Some(ParamsError::InvalidCandidate {
                bits: 7,
                arity: 2,
                parities: 4
            })
        );
    }

    #[test]
    fn test_rejects_outside_universe() {
        let params = CodeParams::new(4, 2).unwrap();
        let bad = combos(&[3, 0b10001], 2);
        assert!(matches!(
            CoverageSearch::with_candidates(params, bad, SearchLimits::default()),
            Err(ParamsError::InvalidCandidate { bits: 17, .. })
        ));
    }

    #[test]
    fn test_custom_order_changes_result() {
        let params = CodeParams::new(4, 2).unwrap();
        let reversed = combos(&[12, 10, 6, 9, 5, 3], 2);
        let outcome = CoverageSearch::with_candidates(params, reversed, SearchLimits::default())
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(pool_bits(outcome.pool()), vec![10, 6, 9, 5]);
    }
}
