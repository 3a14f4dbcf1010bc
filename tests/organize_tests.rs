//! Organize command tests using the real shotsync binary

mod common;

use predicates::prelude::*;

#[test]
fn test_organize_copies_and_renames_into_category_dirs() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Login page.png");
    workspace.write_png("screenshots/AI assistant chat interface (fresh start).png");

    workspace
        .cmd()
        .arg("organize")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login page.png → getting-started/login-page.png"))
        .stdout(predicate::str::contains("Screenshots copied: 2"));

    assert!(workspace.file_exists("public/academy-screenshots/getting-started/login-page.png"));
    assert!(workspace.file_exists(
        "public/academy-screenshots/questionnaire/chat-interface-fresh.png"
    ));
}

#[test]
fn test_organize_reports_missing_sources_and_continues() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Login page.png");

    workspace
        .cmd()
        .arg("organize")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source not found: Registration page (full screen).png"))
        .stdout(predicate::str::contains("Screenshots copied: 1"));
}

#[test]
fn test_organize_ignores_unlisted_files() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Some random capture.png");

    workspace.cmd().arg("organize").assert().success();

    let target = workspace.path.join("public/academy-screenshots");
    let copied = walk_files(&target);
    assert!(copied.is_empty(), "unexpected files: {copied:?}");
}

#[test]
fn test_organize_dry_run_writes_nothing() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Login page.png");

    workspace
        .cmd()
        .args(["organize", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("Would copy 1 screenshots"));

    assert!(!workspace.file_exists("public/academy-screenshots"));
}

#[test]
fn test_organize_with_explicit_roots() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("raw/Projects tab.png");

    workspace
        .cmd()
        .args(["organize", "--source", "raw", "--target", "out"])
        .assert()
        .success();

    assert!(workspace.file_exists("out/projects/projects-tab.png"));
}

#[test]
fn test_organize_is_idempotent() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Login page.png");

    workspace.cmd().arg("organize").assert().success();
    workspace
        .cmd()
        .arg("organize")
        .assert()
        .success()
        .stdout(predicate::str::contains("Screenshots copied: 1"));

    assert_eq!(
        workspace.read_file("public/academy-screenshots/getting-started/login-page.png"),
        workspace.read_file("screenshots/Login page.png")
    );
}

#[test]
fn test_organize_quiet_prints_nothing() {
    let workspace = common::TestWorkspace::new();
    workspace.write_png("screenshots/Login page.png");

    workspace
        .cmd()
        .args(["--quiet", "organize"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(workspace.file_exists("public/academy-screenshots/getting-started/login-page.png"));
}

fn walk_files(root: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(walk_files(&path));
        } else {
            files.push(path);
        }
    }
    files
}
