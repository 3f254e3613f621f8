// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bitmask set types for parity and data universes.
//!
//! This module contains type-safe representations of the sets the search
//! manipulates:
//! - ParityIndex: Parity slot labels (0..m-1)
//! - ParitySet: Single-word bitset of parities (coverage masks)
//! - Combination: Fixed-weight ParitySet, one candidate data element
//! - DataSet: Multi-word bitset of data positions (parity equations)

pub mod combination;
pub mod constants;
pub mod data_set;
pub mod parity;
pub mod parity_set;

// Re-export for convenience
pub use combination::Combination;
pub use constants::*;
pub use data_set::DataSet;
pub use parity::ParityIndex;
pub use parity_set::ParitySet;
