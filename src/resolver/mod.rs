//! Resolver stage: rewrite image placeholders in documentation
//!
//! For each documentation file under the content root, every
//! `![caption](MARKER)` is resolved in order of appearance:
//!
//! 1. The first path segment (relative to the content root) with a numbered
//!    category prefix names the document's category directory.
//! 2. That directory name is translated to a screenshot category.
//! 3. The category's screenshot directory must exist under the target root.
//! 4. Caption rules are tried in order; a rule whose file is missing is
//!    recorded and skipped.
//! 5. Otherwise the lexicographically first fallback candidate is used.
//!
//! Each resolution replaces one occurrence. A document is written back, as a
//! whole, only when its text changed.

pub mod matching;
pub mod placeholder;

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::Config;
use crate::domain::Category;
use crate::domain::category::category_segment;
use crate::error::{self, Result, ShotsyncError};
use crate::ui::Reporter;

pub use matching::{CategoryFiles, RuleBook, RuleMiss};
use placeholder::{Placeholder, find_placeholders, placeholder_regex, replace_first};

/// How a screenshot was chosen for a caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSource {
    /// A caption rule matched
    Rule { pattern: String },
    /// No rule matched; the first candidate file was used
    Fallback,
}

/// Why a placeholder was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No path segment carries a numbered category prefix
    NoCategory,
    /// A prefixed segment was found but names no known category directory
    UnknownCategory { segment: String },
    /// The category's screenshot directory does not exist
    MissingDirectory { path: PathBuf },
    /// Neither a rule nor the fallback produced a file
    NoCandidate { category: Category },
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReason::NoCategory => f.write_str("document is not in a category directory"),
            UnresolvedReason::UnknownCategory { segment } => {
                write!(f, "unknown category directory '{segment}'")
            }
            UnresolvedReason::MissingDirectory { path } => {
                write!(f, "screenshot directory {} does not exist", path.display())
            }
            UnresolvedReason::NoCandidate { category } => {
                write!(f, "no screenshot candidates in {category}")
            }
        }
    }
}

/// Terminal state of one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { web_path: String, source: MatchSource },
    Unresolved(UnresolvedReason),
}

/// A placeholder left in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPlaceholder {
    pub document: PathBuf,
    pub caption: String,
    pub reason: UnresolvedReason,
}

/// A rule hit skipped because its file is missing, with its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTargetMiss {
    pub document: PathBuf,
    pub caption: String,
    pub miss: RuleMiss,
}

/// Outcome of a resolve run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolveReport {
    /// Documentation files visited
    pub documents_scanned: usize,
    /// Documents containing at least one placeholder
    pub documents_with_placeholders: usize,
    pub replacements: usize,
    /// Documents whose text changed (written unless dry run)
    pub files_updated: usize,
    pub unresolved: Vec<UnresolvedPlaceholder>,
    pub rule_misses: Vec<RuleTargetMiss>,
}

/// Resolves placeholders for one configuration and rule book
pub struct Resolver<'a> {
    config: &'a Config,
    rules: RuleBook,
    planned: Vec<PathBuf>,
    placeholder: Regex,
    doc_glob: Glob<'a>,
    fallback_glob: Glob<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a Config, rules: RuleBook) -> Result<Self> {
        let glob = |pattern: &'a str| {
            Glob::new(pattern).map_err(|e| ShotsyncError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            config,
            rules,
            planned: Vec::new(),
            placeholder: placeholder_regex(&config.marker)?,
            doc_glob: glob(config.doc_glob.as_str())?,
            fallback_glob: glob(config.fallback_glob.as_str())?,
        })
    }

    /// Treat these target paths as present even if they are not on disk yet
    ///
    /// Used after a dry-run organize so the preview matches a real run.
    #[must_use]
    pub fn with_planned(mut self, planned: Vec<PathBuf>) -> Self {
        self.planned = planned;
        self
    }

    /// Documentation files under the content root, in path order
    pub fn documents(&self) -> Result<Vec<PathBuf>> {
        let root = &self.config.content_root;
        if !root.is_dir() {
            return Err(error::fs::dir_not_found(root));
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if self.doc_glob.matched(&CandidatePath::from(name)).is_some() {
                documents.push(entry.into_path());
            }
        }
        Ok(documents)
    }

    /// Resolve every document under the content root
    pub fn resolve_all(
        &self,
        dry_run: bool,
        reporter: &mut dyn Reporter,
    ) -> Result<ResolveReport> {
        reporter.stage("Updating documentation...");

        let mut report = ResolveReport::default();
        for document in self.documents()? {
            self.resolve_document(&document, dry_run, reporter, &mut report)?;
        }

        let verb = if dry_run { "Would make" } else { "Made" };
        reporter.stage_finished(&format!(
            "{verb} {} replacements in {} files",
            report.replacements, report.files_updated
        ));

        Ok(report)
    }

    /// Resolve the placeholders of one document, accumulating into `report`
    pub fn resolve_document(
        &self,
        path: &Path,
        dry_run: bool,
        reporter: &mut dyn Reporter,
        report: &mut ResolveReport,
    ) -> Result<()> {
        report.documents_scanned += 1;

        let original = std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))?;
        let placeholders = find_placeholders(&original, &self.placeholder);
        if placeholders.is_empty() {
            return Ok(());
        }

        let relative = path
            .strip_prefix(&self.config.content_root)
            .unwrap_or(path)
            .to_path_buf();
        report.documents_with_placeholders += 1;
        reporter.document(&relative);

        let mut content = original.clone();
        for placeholder in &placeholders {
            let (resolution, misses) = self.resolve_caption(&relative, &placeholder.caption)?;

            for miss in misses {
                reporter.rule_target_missing(&placeholder.caption, &miss.pattern, &miss.filename);
                report.rule_misses.push(RuleTargetMiss {
                    document: relative.clone(),
                    caption: placeholder.caption.clone(),
                    miss,
                });
            }

            match resolution {
                Resolution::Resolved { web_path, source } => {
                    if let Some(updated) = self.substitute(&content, placeholder, &web_path) {
                        content = updated;
                        report.replacements += 1;
                        reporter.resolved(&placeholder.caption, &web_path, &source);
                    }
                }
                Resolution::Unresolved(reason) => {
                    reporter.unresolved(&placeholder.caption, &reason);
                    report.unresolved.push(UnresolvedPlaceholder {
                        document: relative.clone(),
                        caption: placeholder.caption.clone(),
                        reason,
                    });
                }
            }
        }

        if content != original {
            if !dry_run {
                std::fs::write(path, &content).map_err(|e| error::fs::write_failed(path, &e))?;
            }
            report.files_updated += 1;
        }

        Ok(())
    }

    /// Resolve one caption for a document at `relative` (to the content root)
    pub fn resolve_caption(
        &self,
        relative: &Path,
        caption: &str,
    ) -> Result<(Resolution, Vec<RuleMiss>)> {
        let Some(segment) = category_segment(relative) else {
            return unresolved(UnresolvedReason::NoCategory);
        };
        let Some(category) = Category::from_content_dir(segment) else {
            return unresolved(UnresolvedReason::UnknownCategory {
                segment: segment.to_string(),
            });
        };

        let category_dir = self.config.target_root.join(category.slug());
        if !category_dir.is_dir() && !self.is_planned_dir(&category_dir) {
            return unresolved(UnresolvedReason::MissingDirectory { path: category_dir });
        }

        let files = CategoryFiles::collect(&category_dir, &self.planned)?;
        let selection = matching::select(
            self.rules.rules(category),
            caption,
            &files,
            &self.fallback_glob,
        );

        let resolution = match selection.chosen {
            Some((filename, source)) => Resolution::Resolved {
                web_path: self.config.web_path(category.slug(), &filename),
                source,
            },
            None => Resolution::Unresolved(UnresolvedReason::NoCandidate { category }),
        };
        Ok((resolution, selection.misses))
    }

    fn is_planned_dir(&self, dir: &Path) -> bool {
        self.planned.iter().any(|path| path.parent() == Some(dir))
    }

    fn substitute(
        &self,
        content: &str,
        placeholder: &Placeholder,
        web_path: &str,
    ) -> Option<String> {
        replace_first(
            content,
            &placeholder.literal(&self.config.marker),
            &placeholder.resolved(web_path),
        )
    }
}

fn unresolved(reason: UnresolvedReason) -> Result<(Resolution, Vec<RuleMiss>)> {
    Ok((Resolution::Unresolved(reason), Vec::new()))
}

/// Resolve with the built-in rules against the target tree as it is on disk
pub fn resolve(
    config: &Config,
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<ResolveReport> {
    resolve_with_planned(config, Vec::new(), dry_run, reporter)
}

/// Resolve with the built-in rules, counting `planned` copies as present
pub fn resolve_with_planned(
    config: &Config,
    planned: Vec<PathBuf>,
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<ResolveReport> {
    Resolver::new(config, RuleBook::builtin()?)?
        .with_planned(planned)
        .resolve_all(dry_run, reporter)
}
