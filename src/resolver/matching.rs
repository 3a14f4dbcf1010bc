//! Caption to screenshot matching
//!
//! A caption is lower-cased and searched with each of its category's rules
//! in declaration order. The first rule that matches and whose file exists
//! in the category directory wins. When no rule wins, the lexicographically
//! first file matching the fallback glob is used.
//!
//! Lookups go through [`CategoryFiles`], never straight to the directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::{Category, CategoryRules};
use crate::error::{self, Result, ShotsyncError};
use crate::manifest;

use super::MatchSource;

/// A rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub regex: Regex,
    pub target_filename: &'static str,
}

/// Compiled rules for every category, order preserved
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    categories: Vec<(Category, Vec<CompiledRule>)>,
}

impl RuleBook {
    pub fn compile(table: &[CategoryRules]) -> Result<Self> {
        let mut categories = Vec::with_capacity(table.len());
        for (category, rules) in table {
            let compiled = rules
                .iter()
                .map(|rule| {
                    let regex =
                        Regex::new(rule.pattern).map_err(|e| ShotsyncError::InvalidPattern {
                            pattern: rule.pattern.to_string(),
                            reason: e.to_string(),
                        })?;
                    Ok(CompiledRule {
                        regex,
                        target_filename: rule.target_filename,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            categories.push((*category, compiled));
        }
        Ok(Self { categories })
    }

    /// The rules baked into the tool
    pub fn builtin() -> Result<Self> {
        Self::compile(manifest::RULES)
    }

    pub fn rules(&self, category: Category) -> &[CompiledRule] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(&[][..], |(_, rules)| rules.as_slice())
    }
}

/// A rule hit whose screenshot is not in the category directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMiss {
    pub pattern: String,
    pub filename: String,
}

/// Result of matching one caption against one category directory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Chosen file name and how it was chosen
    pub chosen: Option<(String, MatchSource)>,

    /// Rules that matched but were skipped because their file is missing
    pub misses: Vec<RuleMiss>,
}

/// File names available in one category directory
///
/// Holds what is on disk plus the copies the organizer planned for the
/// directory, so a dry run sees the tree a real run would produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFiles {
    names: BTreeSet<String>,
}

impl CategoryFiles {
    /// Regular files in `dir` (if it exists) and planned paths directly under it
    pub fn collect(dir: &Path, planned: &[PathBuf]) -> Result<Self> {
        let mut names = BTreeSet::new();

        if dir.is_dir() {
            let entries = std::fs::read_dir(dir).map_err(|e| error::fs::read_failed(dir, &e))?;
            for entry in entries {
                let entry = entry.map_err(|e| error::fs::read_failed(dir, &e))?;
                if !entry.path().is_file() {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            }
        }

        for path in planned {
            if path.parent() != Some(dir) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.insert(name.to_string());
            }
        }

        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Lexicographically first name matching `glob`
    pub fn first_matching(&self, glob: &Glob<'_>) -> Option<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|name| glob.matched(&CandidatePath::from(*name)).is_some())
    }
}

/// Pick a screenshot for `caption` among the files of one category directory
pub fn select(
    rules: &[CompiledRule],
    caption: &str,
    files: &CategoryFiles,
    fallback: &Glob<'_>,
) -> Selection {
    let caption = caption.to_lowercase();
    let mut selection = Selection::default();

    for rule in rules {
        if !rule.regex.is_match(&caption) {
            continue;
        }
        if files.contains(rule.target_filename) {
            selection.chosen = Some((
                rule.target_filename.to_string(),
                MatchSource::Rule {
                    pattern: rule.regex.as_str().to_string(),
                },
            ));
            return selection;
        }
        selection.misses.push(RuleMiss {
            pattern: rule.regex.as_str().to_string(),
            filename: rule.target_filename.to_string(),
        });
    }

    selection.chosen = files
        .first_matching(fallback)
        .map(|name| (name.to_string(), MatchSource::Fallback));
    selection
}
