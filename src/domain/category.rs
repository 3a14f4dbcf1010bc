//! The seven fixed screenshot categories
//!
//! Each category has three names:
//! - a number (1..=7), giving a stable total order
//! - a slug, used for the screenshot subdirectory and the web path
//! - a documentation directory name (`NN-name`), used to infer a
//!   document's category from its location

use std::fmt;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    GettingStarted,
    BusinessManagement,
    Questionnaire,
    StrategicAnalysis,
    FinancialAnalysis,
    Projects,
    Collaboration,
}

impl Category {
    /// All categories in numbering order
    pub const ALL: [Category; 7] = [
        Category::GettingStarted,
        Category::BusinessManagement,
        Category::Questionnaire,
        Category::StrategicAnalysis,
        Category::FinancialAnalysis,
        Category::Projects,
        Category::Collaboration,
    ];

    pub fn number(self) -> u8 {
        match self {
            Category::GettingStarted => 1,
            Category::BusinessManagement => 2,
            Category::Questionnaire => 3,
            Category::StrategicAnalysis => 4,
            Category::FinancialAnalysis => 5,
            Category::Projects => 6,
            Category::Collaboration => 7,
        }
    }

    /// Screenshot storage directory name, also the web path segment
    pub fn slug(self) -> &'static str {
        match self {
            Category::GettingStarted => "getting-started",
            Category::BusinessManagement => "business-management",
            Category::Questionnaire => "questionnaire",
            Category::StrategicAnalysis => "strategic-analysis",
            Category::FinancialAnalysis => "financial-analysis",
            Category::Projects => "projects",
            Category::Collaboration => "collaboration",
        }
    }

    /// Documentation directory name for this category
    pub fn content_dir(self) -> &'static str {
        match self {
            Category::GettingStarted => "01-getting-started",
            Category::BusinessManagement => "02-businesses",
            Category::Questionnaire => "03-questionnaire",
            Category::StrategicAnalysis => "04-strategic-analysis",
            Category::FinancialAnalysis => "05-financial-analysis",
            Category::Projects => "06-projects",
            Category::Collaboration => "07-collaboration",
        }
    }

    /// Two-digit prefix shared by documentation directories, e.g. `03-`
    pub fn content_prefix(self) -> String {
        format!("{:02}-", self.number())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn from_content_dir(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.content_dir() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Whether a path segment carries one of the numbered category prefixes
pub fn has_category_prefix(segment: &str) -> bool {
    Category::ALL
        .into_iter()
        .any(|c| segment.starts_with(&c.content_prefix()))
}

/// First path segment carrying a numbered category prefix.
///
/// The segment is returned even when it does not name a known category
/// directory (e.g. `03-drafts`); translation is a separate step.
pub fn category_segment(path: &Path) -> Option<&str> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .find(|segment| has_category_prefix(segment))
}
