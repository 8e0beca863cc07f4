// tests/cli/smoke_tests.rs
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn vidshelf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vidshelf"))
}

#[test]
fn shows_help() {
    vidshelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vidshelf"));
}

#[test]
fn encodes_open_duration_range() {
    vidshelf()
        .args(["encode", "--kind", "duration", "--min", "5"])
        .assert()
        .success()
        .stdout("5-\n");
}

#[test]
fn decodes_size_range_to_json() {
    let output = vidshelf()
        .args(["decode", "--kind", "size", "5-10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "min": 5, "max": 10 }));
}

#[test]
fn malformed_range_fails_with_message() {
    vidshelf()
        .args(["decode", "--kind", "size", "abc-10"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("decoding size range")
                .and(predicate::str::contains("abc")),
        );
}

#[test]
fn slider_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "size_maximum": 250 }}"#).unwrap();

    vidshelf()
        .args(["slider", "--kind", "size", "20-"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout("[20,250]\n");
}

#[test]
fn invalid_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "size_maximum": 0 }}"#).unwrap();

    vidshelf()
        .args(["slider", "--kind", "size", "20-"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("size_maximum"));
}

#[test]
fn query_falls_back_on_bad_params() {
    vidshelf()
        .args(["query", "q=talk&size=x-1&duration=10-"])
        .assert()
        .success()
        .stdout("q=talk&sort=newest&size=0-&duration=10-\n");
}

#[test]
fn verbose_logs_parameter_fallbacks() {
    vidshelf()
        .args(["--verbose", "query", "size=x-1&q=%FF"])
        .assert()
        .success()
        .stdout("sort=newest&size=0-&duration=0-\n")
        .stderr(
            predicate::str::contains("falling back to default size range")
                .and(predicate::str::contains("ignoring unreadable search term")),
        );
}

#[test]
fn fallbacks_are_quiet_without_verbose() {
    vidshelf()
        .env_remove("RUST_LOG")
        .args(["query", "size=x-1"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
