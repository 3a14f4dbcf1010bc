//! shotsync - academy screenshot integration
//!
//! Copies captured screenshots into a category-organized tree, then rewrites
//! image placeholders in the documentation with paths to those screenshots.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod manifest;
mod organizer;
mod resolver;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let output = cli.output();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Organize(args) => commands::organize::run(config_path, output, args),
        Commands::Resolve(args) => commands::resolve::run(config_path, output, args),
        Commands::Run(args) => commands::run::run(config_path, output, args),
        Commands::Manifest(args) => commands::manifest::run(args),
        Commands::Config(args) => commands::config::run(config_path, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
