// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle detection over the search trajectory.
//!
//! Each search step is a pure function of the current state, so once any
//! state recurs the search is locked in a loop. This detector uses Brent's
//! algorithm: keep one snapshot, compare every new state against it, and
//! move the snapshot forward whenever the distance since it was taken
//! reaches the next power of two. Memory is one extra state; the reported
//! period is exact.

/// Brent cycle detector over a sequence of states.
#[derive(Debug, Clone)]
pub struct OscillationDetector<S> {
    snapshot: S,
    /// Distance at which the snapshot is next replaced.
    power: u64,
    /// Steps since the snapshot was taken.
    lam: u64,
}

impl<S: Clone + PartialEq> OscillationDetector<S> {
    /// Start watching from `initial`, the state before the first step.
    pub fn new(initial: S) -> Self {
        Self {
            snapshot: initial,
            power: 1,
            lam: 0,
        }
    }

    /// Record the state after one step.
    ///
    /// Returns the cycle period once the state repeats.
    pub fn observe(&mut self, state: &S) -> Option<u64> {
        self.lam += 1;
        if *state == self.snapshot {
            return Some(self.lam);
        }
        if self.lam == self.power {
            self.snapshot = state.clone();
            self.power *= 2;
            self.lam = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed `f` iterates of `x0` into a detector until it reports, returning
    /// the period and the number of steps taken.
    fn detect(x0: u64, f: impl Fn(u64) -> u64, max: u64) -> Option<(u64, u64)> {
        let mut detector = OscillationDetector::new(x0);
        let mut x = x0;
        for step in 1..=max {
            x = f(x);
            if let Some(period) = detector.observe(&x) {
                return Some((period, step));
            }
        }
        None
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(detect(5, |x| x, 10).map(|r| r.0), Some(1));
    }

    #[test]
    fn test_pure_cycle() {
        for period in 1..20 {
            let found = detect(0, |x| (x + 1) % period, 200);
            assert_eq!(found.map(|r| r.0), Some(period), "period {period}");
        }
    }

    #[test]
    fn test_cycle_after_tail() {
        // 0..10 runs straight, then 10..17 loops with period 7.
        let f = |x: u64| if x < 16 { x + 1 } else { 10 };
        let (period, step) = detect(0, f, 200).unwrap();
        assert_eq!(period, 7);
        assert!(step >= 16);
    }

    #[test]
    fn test_no_cycle() {
        assert_eq!(detect(0, |x| x + 1, 1000), None);
    }
}
