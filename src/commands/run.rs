//! Run command implementation: organize, then resolve

use std::path::Path;

use crate::cli::{OutputOptions, RunArgs};
use crate::error::Result;
use crate::manifest::MANIFEST;
use crate::ui;
use crate::{organizer, resolver};

use super::helpers;

pub fn run(config_path: Option<&Path>, output: OutputOptions, args: RunArgs) -> Result<()> {
    let config = helpers::load_config(config_path, args.overrides())?;
    let mut reporter = ui::reporter(output.verbose, output.quiet, args.dry_run);

    let organized = organizer::organize(&config, MANIFEST, args.dry_run, &mut *reporter)?;
    // Under dry run nothing was copied; resolve against the planned tree.
    let resolved = resolver::resolve_with_planned(
        &config,
        organized.targets.clone(),
        args.dry_run,
        &mut *reporter,
    )?;

    reporter.recap(&resolved);

    let mut rows = helpers::organize_rows(&organized);
    rows.extend(helpers::resolve_rows(&resolved));
    helpers::print_summary(&mut *reporter, &rows);
    Ok(())
}
