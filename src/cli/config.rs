use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Arguments for the config command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the configuration every other command would use:\n    shotsync config\n\n\
                  Write a starter configuration file:\n    shotsync config > shotsync.yaml")]
pub struct ConfigArgs {
    /// Directory holding the raw screenshots
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory receiving one subdirectory per category
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Documentation tree to scan
    #[arg(long, value_name = "DIR")]
    pub content: Option<PathBuf>,

    /// Placeholder marker used in image references
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// First segment of the rewritten web paths
    #[arg(long, value_name = "SEGMENT")]
    pub mount: Option<String>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_root: self.source.clone(),
            target_root: self.target.clone(),
            content_root: self.content.clone(),
            marker: self.marker.clone(),
            mount: self.mount.clone(),
        }
    }
}
