// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generated tables compared against the tables shipped in the decoder's
//! C header.
//!
//! The golden files hold the header's `static unsigned int` declarations
//! and `k`-indexed pointer tables for each `(m, t)`. One header table,
//! `g_12_6_4`, was hand-made rather than generated; the golden file for
//! `m=6 t=3` holds the generated version.

mod common;

use goldilocks_codes::emit::{CDeclarations, Declaration};

fn check_golden(m: usize, t: usize, expected: &str) {
    let family = common::family(m, t);
    let text = common::render(CDeclarations::new(Declaration::Static, true), &family);
    assert_eq!(text, expected, "m={m} t={t}");
}

#[test]
fn test_m5_t2_matches_header() {
    check_golden(5, 2, include_str!("golden/m5_t2.h"));
}

#[test]
fn test_m5_t3_matches_header() {
    check_golden(5, 3, include_str!("golden/m5_t3.h"));
}

#[test]
fn test_m6_t2_matches_header() {
    check_golden(6, 2, include_str!("golden/m6_t2.h"));
}

#[test]
fn test_m6_t3_matches_header() {
    check_golden(6, 3, include_str!("golden/m6_t3.h"));
}

#[test]
fn test_plain_declarations_use_int() {
    let family = common::family(5, 2);
    let plain = common::render(CDeclarations::default(), &family);
    let expected: String = include_str!("golden/m5_t2.h")
        .lines()
        .filter(|line| !line.contains('*'))
        .map(|line| format!("{}\n", line.replacen("static unsigned int", "int", 1)))
        .collect();
    assert_eq!(plain, expected);
}

#[test]
fn test_m4_t2_restore_order() {
    let family = common::family(4, 2);
    let last = family.tables().last().unwrap();
    let data: Vec<u64> = last.data_bms().iter().map(|c| c.bits()).collect();
    assert_eq!(data, vec![5, 9, 6, 10, 3, 12]);
}

#[test]
fn test_m7_t3_wide_parity_entries() {
    let family = common::family(7, 3);
    assert_eq!(family.first_k(), 7);
    assert_eq!(family.last_k(), 35);
    let last = family.table(35).unwrap();
    // Rows span 35 data positions, beyond 32-bit C ints.
    assert!(last.parity_bms().iter().any(|row| row.to_u64().unwrap() > u32::MAX as u64));
}

#[test]
fn test_m16_t2_multiword_parity() {
    let family = common::family(16, 2);
    assert_eq!(family.first_k(), 16);
    assert_eq!(family.last_k(), 120);
    let last = family.table(120).unwrap();
    assert_eq!(
        last.parity_bms()[0].to_decimal(),
        "5212658806999670089818851216785411"
    );
    assert!(last.is_consistent());
}
