//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - organize: Organize command arguments
//! - resolve: Resolve command arguments
//! - run: Run command arguments
//! - manifest: Manifest command arguments
//! - config: Config command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod config;
pub mod manifest;
pub mod organize;
pub mod resolve;
pub mod run;

pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use manifest::ManifestArgs;
pub use organize::OrganizeArgs;
pub use resolve::ResolveArgs;
pub use run::RunArgs;

/// shotsync - screenshot organizer and placeholder resolver
#[derive(Parser, Debug)]
#[command(
    name = "shotsync",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Organize academy screenshots and resolve image placeholders",
    long_about = "shotsync copies captured screenshots into per-category directories and \
                  rewrites `![caption](ALT_TEXT_PLACEHOLDER)` image references in the \
                  documentation with paths to the matching screenshot.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shotsync run                      \x1b[90m# Organize, then resolve\x1b[0m\n   \
                  shotsync organize --dry-run       \x1b[90m# Preview the copy\x1b[0m\n   \
                  shotsync resolve --content docs   \x1b[90m# Rewrite placeholders only\x1b[0m\n   \
                  shotsync manifest --rules         \x1b[90m# Show the baked-in tables\x1b[0m\n"
)]
pub struct Cli {
    /// Configuration file (defaults to ./shotsync.yaml when present)
    #[arg(long, short = 'c', global = true, env = "SHOTSYNC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show rule decisions for every placeholder
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print nothing but errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy raw screenshots into per-category directories
    Organize(OrganizeArgs),

    /// Rewrite image placeholders in documentation
    Resolve(ResolveArgs),

    /// Organize, then resolve
    Run(RunArgs),

    /// Show the baked-in manifest and caption rules
    Manifest(ManifestArgs),

    /// Print the effective configuration as YAML
    Config(ConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output options shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub verbose: bool,
    pub quiet: bool,
}

impl Cli {
    pub fn output(&self) -> OutputOptions {
        OutputOptions {
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}
