// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end runs of the `goldilocks` binary.

use std::io::Write;
use std::process::{Command, Output};

fn goldilocks(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldilocks"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GOLDILOCKS_MAX_STEPS")
        .output()
        .expect("failed to run goldilocks")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_codes_plain() {
    let output = goldilocks(&["codes", "4", "2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "int g_4_4_3_hd_code_parity_bms[] = { 3, 12, 5, 10 };\n\
         int g_4_4_3_hd_code_data_bms[] = { 5, 9, 6, 10 };\n\
         int g_5_4_3_hd_code_parity_bms[] = { 19, 28, 5, 10 };\n\
         int g_5_4_3_hd_code_data_bms[] = { 5, 9, 6, 10, 3 };\n\
         int g_6_4_3_hd_code_parity_bms[] = { 19, 28, 37, 42 };\n\
         int g_6_4_3_hd_code_data_bms[] = { 5, 9, 6, 10, 3, 12 };\n"
    );
}

#[test]
fn test_codes_static_index() {
    let output = goldilocks(&["codes", "5", "2", "--static", "--index"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), include_str!("golden/m5_t2.h"));
}

#[test]
fn test_codes_json() {
    let output = goldilocks(&["codes", "3", "3", "--format", "json"]);
    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["name"], "1_3_4");
    assert_eq!(record["data_bms"], serde_json::json!([7]));
    assert_eq!(record["parity_bms"], serde_json::json!(["1", "1", "1"]));
}

#[test]
fn test_invalid_arity_fails_without_output() {
    let output = goldilocks(&["codes", "6", "4"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported equation arity 4"), "{stderr}");
}

#[test]
fn test_oscillation_fails_without_output() {
    let output = goldilocks(&["codes", "9", "2"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("oscillates with period 4"), "{stderr}");
}

#[test]
fn test_step_limit_flag() {
    let output = goldilocks(&["codes", "6", "2", "--max-steps", "5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("did not converge within 5 steps"), "{stderr}");
}

#[test]
fn test_failure_combs() {
    let output = goldilocks(&["failure-combs", "3", "1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "#define NUM_3_2_COMBS 3\n\
         int failure_combs_3_2[NUM_3_2_COMBS][4] =  {{0, -1, -1, -1}, {1, -1, -1, -1}, {2, -1, -1, -1}} ;\n"
    );
}

#[test]
fn test_failure_depth_rejected() {
    let output = goldilocks(&["failure-combs", "10", "5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\ndeclaration = \"static\"\n\n[search]\nmax_steps = 3").unwrap();
    let path = file.path().to_str().unwrap();

    let output = goldilocks(&["--config", path, "codes", "3", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("static unsigned int g_3_3_3_hd_code_parity_bms[]"));

    // m=6 t=2 needs 13 steps, more than the configured budget.
    let output = goldilocks(&["--config", path, "codes", "6", "2"]);
    assert!(!output.status.success());

    // Command-line flags override the file.
    let output = goldilocks(&["--config", path, "codes", "6", "2", "--max-steps", "0"]);
    assert!(output.status.success());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = goldilocks(&["--config", missing.to_str().unwrap(), "codes", "4", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "{stderr}");
}
