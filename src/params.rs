// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Code parameters threaded through every stage of the generator.
//!
//! `CodeParams` is the explicit context object for one run: the number of
//! parities `m` and the equation arity `t`. Every function that needs to know
//! the size of the parity universe takes it as an argument; nothing reads a
//! shared global.

use std::fmt;

use crate::error::ParamsError;
use crate::sets::{choose, ParitySet, MAX_PARITIES};

/// Number of parities each data element feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Arity {
    Two = 2,
    Three = 3,
}

impl Arity {
    /// Get the arity as a count.
    pub fn get(self) -> usize {
        self as usize
    }

    /// Hamming distance of the resulting code (arity + 1).
    ///
    /// This is the third number in every emitted table name.
    pub fn hamming_distance(self) -> usize {
        self.get() + 1
    }
}

impl TryFrom<usize> for Arity {
    type Error = ParamsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Arity::Two),
            3 => Ok(Arity::Three),
            other => Err(ParamsError::UnsupportedArity(other)),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Validated `(m, t)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParams {
    parities: usize,
    arity: Arity,
}

impl CodeParams {
    /// Validate a parity count and an arity.
    ///
    /// The arity is checked first, so `(m, 4)` reports the arity even when
    /// `m` is also out of range.
    pub fn new(parities: usize, arity: usize) -> Result<Self, ParamsError> {
        let arity = Arity::try_from(arity)?;
        if parities == 0 || parities > MAX_PARITIES {
            return Err(ParamsError::ParityCountOutOfRange {
                parities,
                max: MAX_PARITIES,
            });
        }
        Ok(Self { parities, arity })
    }

    /// Number of parities `m`.
    pub fn parities(&self) -> usize {
        self.parities
    }

    /// Equation arity `t`.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Size of the initial candidate pool, C(m, t).
    pub fn candidate_count(&self) -> usize {
        choose(self.parities, self.arity.get())
    }

    /// Every parity of the code.
    pub fn full_mask(&self) -> ParitySet {
        ParitySet::full(self.parities)
    }

    /// Hamming distance of the generated codes.
    pub fn hamming_distance(&self) -> usize {
        self.arity.hamming_distance()
    }

    /// Pool size at which the search stops.
    ///
    /// When there are no more candidates than parities the search never
    /// runs and the initial pool is the smallest code.
    pub fn target_pool_size(&self) -> usize {
        self.parities.min(self.candidate_count())
    }
}

impl fmt::Display for CodeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={} t={}", self.parities, self.arity)
    }
}
