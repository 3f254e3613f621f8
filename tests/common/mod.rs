// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use goldilocks_codes::emit::{write_family, TableWriter};
use goldilocks_codes::{generate_family, CodeFamily, CodeParams, SearchLimits};

/// `(m, t)` pairs for which the search converges, up to m = 8.
pub const CONVERGING: &[(usize, usize)] = &[
    (1, 2),
    (2, 2),
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2),
    (2, 3),
    (3, 3),
    (4, 3),
    (5, 3),
    (6, 3),
    (7, 3),
    (8, 3),
];

/// Run the search with default limits, panicking if it fails.
pub fn family(m: usize, t: usize) -> CodeFamily {
    let params = CodeParams::new(m, t).unwrap();
    generate_family(params, SearchLimits::default())
        .unwrap_or_else(|e| panic!("m={m} t={t}: {e}"))
}

/// Render a family through `writer` into a string.
pub fn render<W: TableWriter>(mut writer: W, family: &CodeFamily) -> String {
    let mut buf = Vec::new();
    write_family(&mut writer, family, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
