// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for parameter validation, search and output.

use std::path::PathBuf;

/// Invalid inputs, rejected before any search state is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    /// Equation arity other than 2 or 3.
    #[error("unsupported equation arity {0}: must be 2 or 3")]
    UnsupportedArity(usize),

    /// Parity count of zero, or too wide for a parity bitmask.
    #[error("parity count {parities} out of range: must be 1..={max}")]
    ParityCountOutOfRange { parities: usize, max: usize },

    /// Fragment count of zero, or too large for the failure-pattern table.
    #[error("fragment count {fragments} out of range: must be 1..={max}")]
    FragmentCountOutOfRange { fragments: usize, max: usize },

    /// Failure depth that does not fit a fixed-width failure row.
    #[error("failure depth {depth} out of range: must be 1..={max}")]
    FailureDepthOutOfRange { depth: usize, max: usize },

    /// A caller-supplied candidate of the wrong weight or outside the parity universe.
    #[error("candidate {bits:#x} is not a {arity}-combination of {parities} parities")]
    InvalidCandidate {
        bits: u64,
        arity: usize,
        parities: usize,
    },
}

/// Ways the coverage search can fail to reach a pool of `m` candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Backtracking was required with nothing on the used stack.
    #[error("search exhausted with no selection to backtrack (step {step})")]
    Exhausted { step: u64 },

    /// The search revisited an earlier state and can never terminate.
    #[error("search oscillates with period {period} (detected at step {step})")]
    Oscillating { step: u64, period: u64 },

    /// The configured step budget ran out before convergence.
    #[error("search did not converge within {limit} steps")]
    StepLimitExceeded { limit: u64 },
}

/// Problems loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error for the generator.
#[derive(Debug, thiserror::Error)]
pub enum GoldilocksError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode table as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
