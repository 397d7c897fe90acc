use anyhow::Result;

use stower::config::Config;
use stower::MapperRegistry;

/// Print registered mapper names, one per line.
pub fn cmd_mappers(config: &Config) -> Result<()> {
    let registry = MapperRegistry::builtin(config.mtime_format.as_deref())?;
    for name in registry.names() {
        println!("{}", name);
    }
    Ok(())
}
