use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Arguments for the run command (organize, then resolve)
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Run both stages using shotsync.yaml:\n    shotsync run\n\n\
                  Run both stages with explicit roots:\n    shotsync run --source raw --target public/academy-screenshots --content public/academy-content\n\n\
                  Preview both stages:\n    shotsync run --dry-run")]
pub struct RunArgs {
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

    /// Report what both stages would do without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
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
