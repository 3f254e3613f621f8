// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator for Goldilocks flat-XOR erasure code tables.
//!
//! A flat-XOR code with `m` parities and equation arity `t` assigns each data
//! element to exactly `t` parities. This crate chooses which `t`-combinations
//! of parities to use, then emits every code in the resulting family as C
//! lookup tables for a decoder.
//!
//! # Pipeline
//!
//! 1. [`params::CodeParams`]: the validated `(m, t)` pair, passed explicitly
//!    to every stage.
//! 2. [`candidates::enumerate`]: all `C(m, t)` combinations, lexicographic.
//! 3. [`search::CoverageSearch`]: a greedy, order-sensitive search with
//!    backtracking that shrinks the pool to `m` candidates while trying to
//!    cover every parity evenly.
//! 4. [`emit::CodeFamily`]: replays the search's selections to produce one
//!    table pair per pool size from `m` up to `C(m, t)`.
//! 5. [`emit::TableWriter`]: renders tables as C declarations or JSON lines.
//!
//! A separate [`failure::FailureCombinations`] generator produces the
//! fragment-loss patterns that decoder tests iterate over.
//!
//! # Termination
//!
//! The search is deterministic but not guaranteed to converge: for some
//! `(m, t)` it enters a loop. Oscillation is detected and reported as
//! [`error::SearchError::Oscillating`], and a step budget bounds every run.
//!
//! # Example
//!
//! ```
//! use goldilocks_codes::{generate_family, CodeParams, SearchLimits};
//!
//! let params = CodeParams::new(4, 2).unwrap();
//! let family = generate_family(params, SearchLimits::default()).unwrap();
//! let names: Vec<String> = family.tables().map(|t| t.name()).collect();
//! assert_eq!(names, vec!["4_4_3", "5_4_3", "6_4_3"]);
//! ```

pub mod candidates;
pub mod config;
pub mod emit;
pub mod error;
pub mod failure;
pub mod params;
pub mod search;
pub mod sets;
pub mod statistics;

pub use emit::{CodeFamily, EmittedCodeTable};
pub use error::{GoldilocksError, ParamsError, SearchError};
pub use params::{Arity, CodeParams};
pub use search::{CoverageSearch, SearchLimits};

/// Run the coverage search for `params` and build its code family.
pub fn generate_family(params: CodeParams, limits: SearchLimits) -> Result<CodeFamily, SearchError> {
    let outcome = CoverageSearch::new(params, limits).run()?;
    Ok(CodeFamily::from_outcome(outcome))
}
