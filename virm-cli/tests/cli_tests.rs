//! Integration tests for the Virm CLI.
//!
//! These tests invoke the `virm` binary as a subprocess and check
//! exit codes, stdout, and stderr.
//!
//! The built-in program always succeeds; trap reporting and exit code 1
//! are covered by the `run` tests in `src/lib.rs`.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn virm() -> Command {
    Command::cargo_bin("virm").unwrap()
}

#[test]
fn reference_program_prints_both_dumps() {
    virm()
        .assert()
        .success()
        .code(0)
        .stdout("Stack:\n [Empty]\nStack:\n 18\n 36\n");
}

#[test]
fn successful_run_is_silent_on_stderr() {
    virm().assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn arguments_are_ignored() {
    virm()
        .args(["--help", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Stack:\n 18\n 36\n"));
}
