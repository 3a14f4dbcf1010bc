//! Console reporting
//!
//! All progress output goes through the [`Reporter`] trait so the stages can
//! run with styled console output, or silently under `--quiet` and in tests.

pub mod formatter;

use std::path::Path;

use console::Style;

use crate::domain::ScreenshotEntry;
use crate::resolver::{MatchSource, ResolveReport, UnresolvedReason};

use formatter::{caption_preview, dry_run_prefix};

/// Progress reporter for the organize and resolve stages
pub trait Reporter {
    /// A stage is starting
    fn stage(&mut self, title: &str);

    fn entry_copied(&mut self, entry: &ScreenshotEntry);

    fn source_missing(&mut self, entry: &ScreenshotEntry);

    /// A document with placeholders is about to be processed
    fn document(&mut self, relative_path: &Path);

    fn resolved(&mut self, caption: &str, web_path: &str, source: &MatchSource);

    fn unresolved(&mut self, caption: &str, reason: &UnresolvedReason);

    /// A rule matched the caption but its screenshot is not on disk
    fn rule_target_missing(&mut self, caption: &str, pattern: &str, filename: &str);

    /// A stage finished
    fn stage_finished(&mut self, message: &str);

    /// List what was left unresolved after the resolve stage
    fn recap(&mut self, report: &ResolveReport);

    /// Final block of labelled counts
    fn summary(&mut self, title: &str, rows: &[(&str, usize)]);
}

/// Styled reporter writing to stdout
pub struct ConsoleReporter {
    verbose: bool,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }

    fn ok(&self) -> String {
        format!("{}{}", dry_run_prefix(self.dry_run), Style::new().green().apply_to("✓"))
    }

    fn warn(&self) -> String {
        Style::new().yellow().bold().apply_to("!").to_string()
    }
}

impl Reporter for ConsoleReporter {
    fn stage(&mut self, title: &str) {
        println!("{}", Style::new().bold().apply_to(title));
    }

    fn entry_copied(&mut self, entry: &ScreenshotEntry) {
        println!(
            "  {} {} → {}/{}",
            self.ok(),
            entry.source_filename,
            entry.category,
            entry.target_filename
        );
    }

    fn source_missing(&mut self, entry: &ScreenshotEntry) {
        println!(
            "  {} Source not found: {}",
            self.warn(),
            entry.source_filename
        );
    }

    fn document(&mut self, relative_path: &Path) {
        println!();
        println!(
            "{}",
            Style::new().cyan().apply_to(relative_path.display())
        );
    }

    fn resolved(&mut self, caption: &str, web_path: &str, source: &MatchSource) {
        let detail = match source {
            MatchSource::Rule { pattern } if self.verbose => {
                format!(" {}", Style::new().dim().apply_to(format!("(rule: {pattern})")))
            }
            MatchSource::Rule { .. } => String::new(),
            MatchSource::Fallback => {
                format!(" {}", Style::new().yellow().apply_to("(fallback)"))
            }
        };
        println!(
            "  {} {} → {}{}",
            self.ok(),
            caption_preview(caption),
            web_path,
            detail
        );
    }

    fn unresolved(&mut self, caption: &str, reason: &UnresolvedReason) {
        println!(
            "  {} No match: {} {}",
            self.warn(),
            caption_preview(caption),
            Style::new().dim().apply_to(format!("({reason})"))
        );
    }

    fn rule_target_missing(&mut self, caption: &str, pattern: &str, filename: &str) {
        println!(
            "  {} Rule '{}' matched {} but {} is missing",
            self.warn(),
            pattern,
            caption_preview(caption),
            filename
        );
    }

    fn stage_finished(&mut self, message: &str) {
        println!();
        println!(
            "{}{} {}",
            dry_run_prefix(self.dry_run),
            Style::new().green().bold().apply_to("✓"),
            message
        );
        println!();
    }

    fn recap(&mut self, report: &ResolveReport) {
        if !report.unresolved.is_empty() {
            println!("{}", Style::new().yellow().bold().apply_to("Unresolved placeholders:"));
            for item in &report.unresolved {
                println!(
                    "  {}: {} {}",
                    item.document.display(),
                    caption_preview(&item.caption),
                    Style::new().dim().apply_to(format!("({})", item.reason))
                );
            }
            println!();
        }

        if !report.rule_misses.is_empty() {
            println!("{}", Style::new().yellow().bold().apply_to("Rule targets missing:"));
            for item in &report.rule_misses {
                println!(
                    "  {}: {} → '{}' wants {}",
                    item.document.display(),
                    caption_preview(&item.caption),
                    item.miss.pattern,
                    item.miss.filename
                );
            }
            println!();
        }
    }

    fn summary(&mut self, title: &str, rows: &[(&str, usize)]) {
        let rule = "=".repeat(60);
        println!("{rule}");
        println!("  {}", Style::new().bold().apply_to(title));
        println!("{rule}");
        for (label, count) in rows {
            println!("  {label}: {count}");
        }
        println!("{rule}");
    }
}

/// Reporter that prints nothing
///
/// Used for `--quiet` and by unit tests.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn stage(&mut self, _title: &str) {}

    fn entry_copied(&mut self, _entry: &ScreenshotEntry) {}

    fn source_missing(&mut self, _entry: &ScreenshotEntry) {}

    fn document(&mut self, _relative_path: &Path) {}

    fn resolved(&mut self, _caption: &str, _web_path: &str, _source: &MatchSource) {}

    fn unresolved(&mut self, _caption: &str, _reason: &UnresolvedReason) {}

    fn rule_target_missing(&mut self, _caption: &str, _pattern: &str, _filename: &str) {}

    fn stage_finished(&mut self, _message: &str) {}

    fn recap(&mut self, _report: &ResolveReport) {}

    fn summary(&mut self, _title: &str, _rows: &[(&str, usize)]) {}
}

/// Pick the reporter for the global output flags
pub fn reporter(verbose: bool, quiet: bool, dry_run: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose, dry_run))
    }
}
