use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Arguments for the resolve command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Rewrite placeholders using shotsync.yaml:\n    shotsync resolve\n\n\
                  Rewrite a specific documentation tree:\n    shotsync resolve --content public/academy-content --target public/academy-screenshots\n\n\
                  Use a different placeholder marker:\n    shotsync resolve --marker TODO_SCREENSHOT\n\n\
                  Show every rule decision without writing:\n    shotsync -v resolve --dry-run")]
pub struct ResolveArgs {
    /// Screenshot directory populated by `organize`
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

    /// Report replacements without writing documents
    #[arg(long)]
    pub dry_run: bool,
}

impl ResolveArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target_root: self.target.clone(),
            content_root: self.content.clone(),
            marker: self.marker.clone(),
            mount: self.mount.clone(),
            ..ConfigOverrides::default()
        }
    }
}
