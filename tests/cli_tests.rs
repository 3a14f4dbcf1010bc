//! CLI integration tests using the real shotsync binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Organize academy screenshots"))
        .stdout(predicate::str::contains("organize"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("manifest"));
}

#[test]
fn test_version_output() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shotsync"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("Manifest entries: 49"));
}

#[test]
fn test_missing_subcommand_fails() {
    let workspace = common::TestWorkspace::new();
    workspace.cmd().assert().failure();
}

#[test]
fn test_manifest_lists_entries() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login page.png"))
        .stdout(predicate::str::contains("login-page.png"))
        .stdout(predicate::str::contains("collaboration"));
}

#[test]
fn test_manifest_single_category_with_rules() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["manifest", "--category", "questionnaire", "--rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chat-interface-fresh.png"))
        .stdout(predicate::str::contains("ai.*chat"))
        .stdout(predicate::str::contains("Login page.png").not());
}

#[test]
fn test_manifest_unknown_category_fails() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["manifest", "--category", "marketing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown category: marketing"));
}

#[test]
fn test_completions_bash() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shotsync"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let workspace = common::TestWorkspace::new();
    workspace
        .cmd()
        .args(["-v", "-q", "run"])
        .assert()
        .failure();
}

#[test]
fn test_verbose_shows_rule_pattern() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("public/academy-screenshots/projects/projects-tab.png");
    workspace.write_file(
        "public/academy-content/06-projects/overview.md",
        "![The projects tab](ALT_TEXT_PLACEHOLDER)\n",
    );

    workspace
        .cmd()
        .args(["--verbose", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(rule: projects tab)"));
}
