//! Help, version and completion output

#![allow(deprecated)] // cargo_bin deprecation, replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn cuesync() -> Command {
    let mut cmd = Command::cargo_bin("cuesync").expect("binary 'cuesync' should be built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    cuesync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cuesync"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("at"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_documents_clock_flags() {
    cuesync()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--interval-ms"))
        .stdout(predicate::str::contains("--step"))
        .stdout(predicate::str::contains("--until"))
        .stdout(predicate::str::contains("--catalog"));
}

#[test]
fn version_flag_prints_version() {
    cuesync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_is_usage_error() {
    cuesync().assert().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cuesync()
        .arg("rewind")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn completions_for_each_shell() {
    for shell in ["bash", "zsh", "fish"] {
        cuesync()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("cuesync"));
    }
}
