//! Command helper utilities

use std::path::Path;

use crate::config::{Config, ConfigOverrides};
use crate::error::Result;
use crate::organizer::OrganizeReport;
use crate::resolver::ResolveReport;
use crate::ui::Reporter;

/// Load configuration, apply command line overrides and validate
///
/// `config_path` is the `--config`/`SHOTSYNC_CONFIG` value, if any.
pub fn load_config(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Config> {
    let mut config = Config::load(config_path)?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

pub fn organize_rows(report: &OrganizeReport) -> Vec<(&'static str, usize)> {
    vec![
        ("Screenshots copied", report.copied),
        ("Sources missing", report.missing.len()),
    ]
}

pub fn resolve_rows(report: &ResolveReport) -> Vec<(&'static str, usize)> {
    vec![
        ("Documents scanned", report.documents_scanned),
        ("Documents with placeholders", report.documents_with_placeholders),
        ("Replacements made", report.replacements),
        ("Files updated", report.files_updated),
        ("Unresolved placeholders", report.unresolved.len()),
        ("Rule targets missing", report.rule_misses.len()),
    ]
}

/// Print the closing summary block
pub fn print_summary(reporter: &mut dyn Reporter, rows: &[(&'static str, usize)]) {
    reporter.summary("SCREENSHOT INTEGRATION COMPLETE", rows);
}
