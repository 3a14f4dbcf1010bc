//! Run configuration
//!
//! Roots and textual conventions are layered:
//! 1. Built-in defaults
//! 2. A YAML file: `--config`/`SHOTSYNC_CONFIG`, else `shotsync.yaml` in the
//!    current directory, else `<config dir>/shotsync/config.yaml`
//! 3. Command line flags
//!
//! Relative paths in a YAML file are resolved against the file's directory.
//! The manifest and caption rules are not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::error::{self, Result, ShotsyncError};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "shotsync.yaml";

pub const DEFAULT_MARKER: &str = "ALT_TEXT_PLACEHOLDER";
pub const DEFAULT_MOUNT: &str = "academy-screenshots";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the raw screenshots under their captured names
    pub source_root: PathBuf,

    /// Directory receiving one subdirectory per category
    pub target_root: PathBuf,

    /// Documentation tree scanned for placeholders
    pub content_root: PathBuf,

    /// Sentinel standing in for an unknown image path
    pub marker: String,

    /// First segment of resolved web paths, without slashes
    pub mount: String,

    /// File name glob selecting documentation files
    pub doc_glob: String,

    /// File name glob for fallback candidates in a category directory
    pub fallback_glob: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("screenshots"),
            target_root: PathBuf::from("public").join(DEFAULT_MOUNT),
            content_root: PathBuf::from("public").join("academy-content"),
            marker: DEFAULT_MARKER.to_string(),
            mount: DEFAULT_MOUNT.to_string(),
            doc_glob: "*.md".to_string(),
            fallback_glob: "*.png".to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_root: Option<PathBuf>,
    pub target_root: Option<PathBuf>,
    pub content_root: Option<PathBuf>,
    pub marker: Option<String>,
    pub mount: Option<String>,
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a configuration file, resolving relative roots against its directory
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::not_found(path));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path, &e))?;

        let mut config = Self::from_yaml(&content).map_err(|e| match e {
            ShotsyncError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path, reason)
            }
            other => other,
        })?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }

        Ok(config)
    }

    /// Load from an explicit file, or discover one, or fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match discover_config_file() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(source_root) = overrides.source_root {
            self.source_root = source_root;
        }
        if let Some(target_root) = overrides.target_root {
            self.target_root = target_root;
        }
        if let Some(content_root) = overrides.content_root {
            self.content_root = content_root;
        }
        if let Some(marker) = overrides.marker {
            self.marker = marker;
        }
        if let Some(mount) = overrides.mount {
            self.mount = mount;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(error::config::invalid("marker must not be empty"));
        }
        if self.mount.is_empty() || self.mount.starts_with('/') || self.mount.ends_with('/') {
            return Err(error::config::invalid(format!(
                "mount '{}' must be non-empty and have no leading or trailing '/'",
                self.mount
            )));
        }
        for pattern in [&self.doc_glob, &self.fallback_glob] {
            Glob::new(pattern).map_err(|e| ShotsyncError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Web path of a screenshot, e.g. `/academy-screenshots/projects/projects-tab.png`
    pub fn web_path(&self, category_slug: &str, filename: &str) -> String {
        format!("/{}/{}/{}", self.mount, category_slug, filename)
    }

    fn rebase(&mut self, base: &Path) {
        for root in [
            &mut self.source_root,
            &mut self.target_root,
            &mut self.content_root,
        ] {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let global = dirs::config_dir()?.join("shotsync").join("config.yaml");
    global.is_file().then_some(global)
}
