//! Config command implementation

use std::path::Path;

use crate::cli::ConfigArgs;
use crate::error::Result;

use super::helpers;

/// Print the effective configuration as YAML
///
/// The output is a valid configuration file, so it doubles as a starter template.
pub fn run(config_path: Option<&Path>, args: ConfigArgs) -> Result<()> {
    let config = helpers::load_config(config_path, args.overrides())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
