//! Config command and configuration loading tests

mod common;

use predicates::prelude::*;

#[test]
fn test_config_prints_defaults() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("source_root: screenshots"))
        .stdout(predicate::str::contains("marker: ALT_TEXT_PLACEHOLDER"))
        .stdout(predicate::str::contains("mount: academy-screenshots"));
}

#[test]
fn test_config_output_round_trips_as_config_file() {
    let workspace = common::TestWorkspace::new();
    let output = workspace
        .cmd()
        .args(["config", "--marker", "TBD"])
        .output()
        .unwrap();
    assert!(output.status.success());

    workspace.write_file("shotsync.yaml", &String::from_utf8(output.stdout).unwrap());

    workspace
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("marker: TBD"));
}

#[test]
fn test_global_config_file_is_discovered() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".xdg/shotsync/config.yaml", "mount: global-mount\n");

    workspace
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("mount: global-mount"));
}

#[test]
fn test_local_config_wins_over_global() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".xdg/shotsync/config.yaml", "mount: global-mount\n");
    workspace.write_file("shotsync.yaml", "mount: local-mount\n");

    workspace
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("mount: local-mount"));
}

#[test]
fn test_explicit_config_missing_fails() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["--config", "absent.yaml", "config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unknown_config_key_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("shotsync.yaml", "colour: blue\n");

    workspace
        .cmd()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_invalid_mount_fails_validation() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["resolve", "--mount", "/shots/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
