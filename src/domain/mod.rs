//! Domain types for screenshot organization and placeholder resolution

pub mod category;

pub use category::Category;

/// One manifest entry: where a raw screenshot goes and what it is renamed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotEntry {
    pub source_filename: &'static str,
    pub category: Category,
    pub target_filename: &'static str,
}

impl ScreenshotEntry {
    pub const fn new(
        source_filename: &'static str,
        category: Category,
        target_filename: &'static str,
    ) -> Self {
        Self {
            source_filename,
            category,
            target_filename,
        }
    }
}

/// A caption pattern and the screenshot it points at.
///
/// `pattern` is a regular expression searched (not anchored) in the
/// lower-cased caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub pattern: &'static str,
    pub target_filename: &'static str,
}

impl MatchRule {
    pub const fn new(pattern: &'static str, target_filename: &'static str) -> Self {
        Self {
            pattern,
            target_filename,
        }
    }
}

/// Rules for one category, in priority order
pub type CategoryRules = (Category, &'static [MatchRule]);
