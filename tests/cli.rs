//! Command-line contract tests
//!
//! Runs the built binary and checks its stdout line and exit status.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuzzy-premium"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_prints_premium() {
    for (args, expected) in [
        (["22", "100", "180", "0"], "€ 10.0\n"),
        (["32", "160", "280", "10"], "€ 51.67\n"),
        (["28", "130", "250", "5"], "€ 50.49\n"),
        (["20", "125", "235", "0"], "€ 42.5\n"),
    ] {
        let output = run(&args);

        assert!(output.status.success(), "{args:?} failed: {output:?}");
        assert_eq!(stdout(&output), expected);
    }
}

#[test]
fn test_explain_lists_every_rule() {
    let output = run(&["32", "160", "280", "10", "--explain"]);
    let stdout = stdout(&output);
    let lines: Vec<_> = stdout.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "€ 51.67");
    assert!(lines[5].starts_with("rule 5: weight 1.0000, output 40.0000: if smoker then 40"));
    assert!(lines[6].starts_with("rule 6: weight 0.0000"));
    assert!(lines[1].starts_with("rule 1: weight 1.0000"));
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    let output = run(&["22", "100", "180"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_non_numeric_argument_is_a_usage_error() {
    let output = run(&["22", "high", "180", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_domain_error_exits_with_failure() {
    let output = run(&["0", "130", "250", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr.contains("rule 2 takes the logarithm of a non-positive value"), "{stderr}");
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = run(&["28", "130", "250", "5", "--log-level", "debug"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "€ 50.49\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("rule fired"));
}
