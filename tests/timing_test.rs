// Tests for the stack vs heap timing binary

use std::process::Command;

#[test]
fn test_timing_small_run() {
    let output = Command::new(env!("CARGO_BIN_EXE_memregions-timing"))
        .args(["2", "1000"])
        .output()
        .expect("failed to run memregions-timing");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Running 2 tests with 1000 values each"));
    assert!(stdout.contains("Test 1:"));
    assert!(stdout.contains("Test 2:"));
    assert!(!stdout.contains("Test 3:"));
    assert!(stdout.contains("=== FINAL RESULTS ==="));
}

#[test]
fn test_timing_rejects_invalid_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_memregions-timing"))
        .arg("many")
        .output()
        .expect("failed to run memregions-timing");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
}
