//! CLI integration tests for rigdocctl.
//!
//! Runs the real binary and checks the process-level contract:
//! - rigdocctl --help            lists the four commands
//! - rigdocctl symptoms --json   stdout is one JSON array, nothing else
//! - rigdocctl diagnose          bad input lands on stderr as [ERROR] lines
//! - rigdocctl diagnose --json   stdout stays machine-parseable, warnings on stderr

use std::process::Command;

fn rigdocctl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rigdocctl"))
}

#[test]
fn test_help_lists_commands() {
    let output = rigdocctl()
        .arg("--help")
        .output()
        .expect("Failed to run rigdocctl");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "--help should succeed");
    for command in ["symptoms", "causes", "diagnose", "history"] {
        assert!(
            stdout.contains(command),
            "Help should mention {} command, got: {}",
            command,
            stdout
        );
    }
}

#[test]
fn test_symptoms_json_stdout_is_pure() {
    let output = rigdocctl()
        .args(["symptoms", "--json"])
        .output()
        .expect("Failed to run rigdocctl");

    assert!(output.status.success(), "symptoms --json should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let symptoms: Vec<String> =
        serde_json::from_str(&stdout).expect("stdout should be exactly one JSON array");
    assert_eq!(symptoms.len(), 30, "built-in catalog lists 30 symptoms");
}

/// Out-of-range confidence in a symptom argument must present like any
/// other rejected input: an [ERROR] line on stderr, no backtrace.
#[test]
fn test_diagnose_out_of_range_confidence_is_an_error_line() {
    let output = rigdocctl()
        .args(["diagnose", "1=1.5", "--no-save"])
        .output()
        .expect("Failed to run rigdocctl");

    assert!(
        !output.status.success(),
        "out-of-range confidence should fail the run"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[ERROR]") && stderr.contains("outside 0.0..=1.0"),
        "Expected an [ERROR] line naming the range, got stderr: {}",
        stderr
    );
    assert!(
        !stderr.contains("Stack backtrace"),
        "Rejected user input should not dump a backtrace, got stderr: {}",
        stderr
    );
    assert!(
        output.stdout.is_empty(),
        "Nothing should reach stdout on a rejected run"
    );
}

#[test]
fn test_diagnose_empty_selection_is_an_error_line() {
    let output = rigdocctl()
        .args(["diagnose", "--no-save"])
        .output()
        .expect("Failed to run rigdocctl");

    assert!(!output.status.success(), "empty selection should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[ERROR]") && stderr.contains("Select at least one symptom"),
        "Expected the empty-observation [ERROR] line, got stderr: {}",
        stderr
    );
}

/// The unknown-symptom warning belongs on stderr; a `--json` consumer
/// must be able to parse stdout as a single document.
#[test]
fn test_diagnose_json_stdout_stays_machine_parseable() {
    let output = rigdocctl()
        .args([
            "diagnose",
            "no such symptom",
            "CPU fan spinning audibly loud",
            "--json",
            "--no-save",
        ])
        .output()
        .expect("Failed to run rigdocctl");

    assert!(output.status.success(), "diagnose --json should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let run: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be exactly one JSON document");
    assert_eq!(run["results"][0]["cause_id"], 4);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[WARNING]") && stderr.contains("no such symptom"),
        "The unknown-symptom warning belongs on stderr, got: {}",
        stderr
    );
}
