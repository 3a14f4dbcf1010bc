use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Arguments for the organize command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy screenshots using shotsync.yaml:\n    shotsync organize\n\n\
                  Copy from an explicit download folder:\n    shotsync organize --source ~/Downloads/captures --target public/academy-screenshots\n\n\
                  See what would be copied:\n    shotsync organize --dry-run")]
pub struct OrganizeArgs {
    /// Directory holding the raw screenshots
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory receiving one subdirectory per category
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Report what would be copied without touching the target
    #[arg(long)]
    pub dry_run: bool,
}

impl OrganizeArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_root: self.source.clone(),
            target_root: self.target.clone(),
            ..ConfigOverrides::default()
        }
    }
}
