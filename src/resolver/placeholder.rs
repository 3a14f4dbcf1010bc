//! Placeholder syntax: `![caption](MARKER)`

use regex::Regex;

use crate::error::Result;

/// One placeholder occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub caption: String,
}

impl Placeholder {
    /// The exact text of this placeholder for a given marker
    pub fn literal(&self, marker: &str) -> String {
        format!("![{}]({})", self.caption, marker)
    }

    /// The same image reference pointing at `target`
    pub fn resolved(&self, target: &str) -> String {
        format!("![{}]({})", self.caption, target)
    }
}

/// Regex matching `![caption](marker)` with a non-empty caption free of `]`
pub fn placeholder_regex(marker: &str) -> Result<Regex> {
    let pattern = format!(r"!\[([^\]]+)\]\({}\)", regex::escape(marker));
    Ok(Regex::new(&pattern)?)
}

/// All placeholders in order of appearance
pub fn find_placeholders(content: &str, regex: &Regex) -> Vec<Placeholder> {
    regex
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|caption| Placeholder {
            caption: caption.as_str().to_string(),
        })
        .collect()
}

/// Replace the first remaining occurrence of `from`; `None` if there is none
pub fn replace_first(content: &str, from: &str, to: &str) -> Option<String> {
    content.contains(from).then(|| content.replacen(from, to, 1))
}
