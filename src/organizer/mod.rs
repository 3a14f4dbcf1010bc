//! Organizer stage: copy raw screenshots into per-category directories
//!
//! Entries are processed one at a time in manifest order. A missing source is
//! reported and skipped; any other I/O failure aborts the stage. Nothing is
//! rolled back, and re-running overwrites each destination with the same
//! bytes, so a second run leaves the target tree unchanged.

use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::config::Config;
use crate::domain::ScreenshotEntry;
use crate::error::{self, Result};
use crate::ui::Reporter;

/// Outcome of an organize run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Entries copied (or that would be copied under dry run)
    pub copied: usize,

    /// Source file names that were not found
    pub missing: Vec<String>,

    /// Destination of every copied entry, in manifest order
    pub targets: Vec<PathBuf>,
}

/// Destination of an entry under the target root
pub fn target_path(target_root: &Path, entry: &ScreenshotEntry) -> PathBuf {
    target_root
        .join(entry.category.slug())
        .join(entry.target_filename)
}

/// Copy every manifest entry whose source exists
pub fn organize(
    config: &Config,
    entries: &[ScreenshotEntry],
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<OrganizeReport> {
    reporter.stage("Organizing screenshots...");

    let mut report = OrganizeReport::default();

    for entry in entries {
        let source = config.source_root.join(entry.source_filename);
        if !source.is_file() {
            reporter.source_missing(entry);
            report.missing.push(entry.source_filename.to_string());
            continue;
        }

        let target = target_path(&config.target_root, entry);
        if !dry_run {
            copy_preserving_times(&source, &target)?;
        }

        reporter.entry_copied(entry);
        report.copied += 1;
        report.targets.push(target);
    }

    let verb = if dry_run { "Would copy" } else { "Copied" };
    reporter.stage_finished(&format!(
        "{verb} {} screenshots to organized directories",
        report.copied
    ));

    Ok(report)
}

/// Copy a file, creating its parent directory and keeping access/modification times
fn copy_preserving_times(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| error::fs::create_dir_failed(parent, &e))?;
    }

    std::fs::copy(source, target).map_err(|e| error::fs::copy_failed(source, target, &e))?;

    let metadata = std::fs::metadata(source).map_err(|e| error::fs::read_failed(source, &e))?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, accessed, modified)
        .map_err(|e| error::fs::write_failed(target, &e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::ui::SilentReporter;
    use tempfile::TempDir;

    const ENTRIES: &[ScreenshotEntry] = &[
        ScreenshotEntry::new("Login page.png", Category::GettingStarted, "login-page.png"),
        ScreenshotEntry::new("Projects tab.png", Category::Projects, "projects-tab.png"),
        ScreenshotEntry::new("Not captured.png", Category::Projects, "not-captured.png"),
    ];

    fn setup() -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        let config = Config {
            source_root: temp.path().join("raw"),
            target_root: temp.path().join("out"),
            content_root: temp.path().join("content"),
            ..Config::default()
        };
        std::fs::create_dir_all(&config.source_root).unwrap();
        std::fs::write(config.source_root.join("Login page.png"), b"login-bytes").unwrap();
        std::fs::write(config.source_root.join("Projects tab.png"), b"projects-bytes").unwrap();
        (temp, config)
    }

    #[test]
    fn test_copies_existing_and_skips_missing() {
        let (_temp, config) = setup();

        let report = organize(&config, ENTRIES, false, &mut SilentReporter).unwrap();

        assert_eq!(report.copied, 2);
        assert_eq!(report.missing, vec!["Not captured.png".to_string()]);
        assert_eq!(
            std::fs::read(config.target_root.join("getting-started/login-page.png")).unwrap(),
            b"login-bytes"
        );
        assert_eq!(
            std::fs::read(config.target_root.join("projects/projects-tab.png")).unwrap(),
            b"projects-bytes"
        );
        assert!(!config.target_root.join("projects/not-captured.png").exists());
    }

    #[test]
    fn test_second_run_is_identical() {
        let (_temp, config) = setup();

        let first = organize(&config, ENTRIES, false, &mut SilentReporter).unwrap();
        let second = organize(&config, ENTRIES, false, &mut SilentReporter).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            std::fs::read(config.target_root.join("getting-started/login-page.png")).unwrap(),
            b"login-bytes"
        );
    }

    #[test]
    fn test_preserves_modification_time() {
        let (_temp, config) = setup();
        let source = config.source_root.join("Login page.png");
        let past = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&source, past).unwrap();

        organize(&config, ENTRIES, false, &mut SilentReporter).unwrap();

        let copied = std::fs::metadata(config.target_root.join("getting-started/login-page.png"))
            .unwrap();
        assert_eq!(FileTime::from_last_modification_time(&copied), past);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (_temp, config) = setup();

        let report = organize(&config, ENTRIES, true, &mut SilentReporter).unwrap();

        assert_eq!(report.copied, 2);
        assert_eq!(
            report.targets,
            vec![
                config.target_root.join("getting-started").join("login-page.png"),
                config.target_root.join("projects").join("projects-tab.png"),
            ]
        );
        assert!(!config.target_root.exists());
    }

    #[test]
    fn test_directory_named_like_source_is_missing() {
        let (_temp, config) = setup();
        std::fs::create_dir_all(config.source_root.join("Not captured.png")).unwrap();

        let report = organize(&config, ENTRIES, false, &mut SilentReporter).unwrap();

        assert_eq!(report.missing.len(), 1);
    }

    #[test]
    fn test_target_path() {
        let entry = ScreenshotEntry::new(
            "Kickstart Project.png",
            Category::Projects,
            "kickstart-project.png",
        );
        assert_eq!(
            target_path(Path::new("/srv/shots"), &entry),
            PathBuf::from("/srv/shots/projects/kickstart-project.png")
        );
    }
}
