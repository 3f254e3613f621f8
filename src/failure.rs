// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Failure-pattern tables for decoder tests.
//!
//! A decoder test walks a table of fragment-loss patterns: every set of up
//! to `depth` fragments out of `n`, smallest sets first. Rows are fixed width
//! so the consuming harness can declare them as `int[][4]`; short rows are
//! padded with `-1`.

use std::io::{self, Write};

use crate::candidates::tuples;
use crate::error::ParamsError;
use crate::sets::{choose, FAILURE_ROW_PAD, FAILURE_ROW_WIDTH, MAX_FRAGMENTS};

/// One failure pattern, padded to full width.
pub type FailureRow = [i32; FAILURE_ROW_WIDTH];

/// All failure patterns of `1..=depth` fragments out of `fragments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureCombinations {
    fragments: usize,
    depth: usize,
    rows: Vec<FailureRow>,
}

impl FailureCombinations {
    pub fn generate(fragments: usize, depth: usize) -> Result<Self, ParamsError> {
        if fragments == 0 || fragments > MAX_FRAGMENTS {
            return Err(ParamsError::FragmentCountOutOfRange {
                fragments,
                max: MAX_FRAGMENTS,
            });
        }
        if depth == 0 || depth > FAILURE_ROW_WIDTH {
            return Err(ParamsError::FailureDepthOutOfRange {
                depth,
                max: FAILURE_ROW_WIDTH,
            });
        }

        let total: usize = (1..=depth).map(|size| choose(fragments, size)).sum();
        let mut rows = Vec::with_capacity(total);
        for size in 1..=depth {
            for tuple in tuples(fragments, size) {
                let mut row = [FAILURE_ROW_PAD; FAILURE_ROW_WIDTH];
                for (slot, &fragment) in row.iter_mut().zip(&tuple) {
                    // fragment < MAX_FRAGMENTS
                    *slot = fragment as i32;
                }
                rows.push(row);
            }
        }
        debug_assert_eq!(rows.len(), total);

        Ok(Self {
            fragments,
            depth,
            rows,
        })
    }

    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn rows(&self) -> &[FailureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `NUM_<n>_<depth+1>_COMBS`.
    pub fn count_macro(&self) -> String {
        format!("NUM_{}_{}_COMBS", self.fragments, self.depth + 1)
    }

    /// `failure_combs_<n>_<depth+1>`.
    pub fn array_name(&self) -> String {
        format!("failure_combs_{}_{}", self.fragments, self.depth + 1)
    }

    /// Write the `#define` and the array initializer.
    pub fn write_c(&self, out: &mut dyn Write) -> io::Result<()> {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(i32::to_string).collect();
                format!("{{{}}}", cells.join(", "))
            })
            .collect();
        writeln!(out, "#define {} {}", self.count_macro(), self.rows.len())?;
        writeln!(
            out,
            "int {}[{}][{}] =  {{{}}} ;",
            self.array_name(),
            self.count_macro(),
            FAILURE_ROW_WIDTH,
            rows.join(", ")
        )
    }
}
