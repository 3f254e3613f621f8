// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants and counting helpers shared by the set types.

/// Largest supported parity count.
///
/// Parity sets and combinations are stored in a single `u64`, so the
/// parity universe cannot exceed 64 slots.
pub const MAX_PARITIES: usize = 64;

/// Largest fragment count accepted by the failure-pattern generator.
pub const MAX_FRAGMENTS: usize = 64;

/// Width of one failure-pattern row.
///
/// The decoder test harness reads failure patterns as `int[][4]`, so no
/// pattern can name more than four fragments.
pub const FAILURE_ROW_WIDTH: usize = 4;

/// Sentinel that pads short failure-pattern rows.
pub const FAILURE_ROW_PAD: i32 = -1;

/// Compute the binomial coefficient (n choose k).
///
/// Uses the multiplicative form so that intermediate values stay small;
/// every partial product `C(n, i)` is an integer.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}
