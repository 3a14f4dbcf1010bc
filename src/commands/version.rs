//! Version command implementation

use crate::error::Result;
use crate::manifest::{MANIFEST, RULES};

/// Run version command
pub fn run() -> Result<()> {
    println!("shotsync {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Manifest entries: {}", MANIFEST.len());
    println!(
        "  Caption rules: {}",
        RULES.iter().map(|(_, rules)| rules.len()).sum::<usize>()
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
