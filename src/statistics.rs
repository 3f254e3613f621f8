// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-run counters kept by the coverage search and returned with its outcome.

use std::fmt;

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Loop iterations of any kind.
    Steps,
    /// Selections of a candidate inside the needed set.
    CoverSelections,
    /// Selections of a candidate containing the needed set.
    RolloverSelections,
    /// Selections undone.
    Backtracks,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    peak_used: usize,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Note the current used-stack depth.
    pub(crate) fn record_depth(&mut self, depth: usize) {
        self.peak_used = self.peak_used.max(depth);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Deepest the used stack has been.
    pub fn peak_used(&self) -> usize {
        self.peak_used
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps={} cover={} rollover={} backtracks={} peak_used={}",
            self.get(Counters::Steps),
            self.get(Counters::CoverSelections),
            self.get(Counters::RolloverSelections),
            self.get(Counters::Backtracks),
            self.peak_used
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Steps), 0);
        assert_eq!(stats.get(Counters::Backtracks), 0);
        assert_eq!(stats.peak_used(), 0);
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Steps);
        stats.increment_counter(Counters::Steps);
        stats.increment_counter(Counters::Backtracks);
        assert_eq!(stats.get(Counters::Steps), 2);
        assert_eq!(stats.get(Counters::Backtracks), 1);
        assert_eq!(stats.get(Counters::CoverSelections), 0);
    }

    #[test]
    fn test_peak_depth() {
        let mut stats = Statistics::new();
        stats.record_depth(3);
        stats.record_depth(1);
        assert_eq!(stats.peak_used(), 3);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Steps);
        assert_eq!(
            stats.to_string(),
            "steps=1 cover=0 rollover=0 backtracks=0 peak_used=0"
        );
    }
}
