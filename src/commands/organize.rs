//! Organize command implementation

use std::path::Path;

use crate::cli::{OrganizeArgs, OutputOptions};
use crate::error::Result;
use crate::manifest::MANIFEST;
use crate::organizer;
use crate::ui;

use super::helpers;

pub fn run(config_path: Option<&Path>, output: OutputOptions, args: OrganizeArgs) -> Result<()> {
    let config = helpers::load_config(config_path, args.overrides())?;
    let mut reporter = ui::reporter(output.verbose, output.quiet, args.dry_run);

    let report = organizer::organize(&config, MANIFEST, args.dry_run, &mut *reporter)?;

    helpers::print_summary(&mut *reporter, &helpers::organize_rows(&report));
    Ok(())
}
