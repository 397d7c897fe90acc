use anyhow::Result;

use stower::config::Config;

use super::{resolve_settings, select_mapper};

/// Batch mode. Per-file failures are logged and do not fail the command.
pub fn cmd_process(config: &Config) -> Result<()> {
    let settings = resolve_settings(config)?;
    let mapper = select_mapper(&settings)?;
    stower::process(&settings, mapper)?;
    Ok(())
}
