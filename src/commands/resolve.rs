//! Resolve command implementation

use std::path::Path;

use crate::cli::{OutputOptions, ResolveArgs};
use crate::error::Result;
use crate::resolver;
use crate::ui;

use super::helpers;

pub fn run(config_path: Option<&Path>, output: OutputOptions, args: ResolveArgs) -> Result<()> {
    let config = helpers::load_config(config_path, args.overrides())?;
    let mut reporter = ui::reporter(output.verbose, output.quiet, args.dry_run);

    let report = resolver::resolve(&config, args.dry_run, &mut *reporter)?;

    reporter.recap(&report);
    helpers::print_summary(&mut *reporter, &helpers::resolve_rows(&report));
    Ok(())
}
