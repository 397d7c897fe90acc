use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use stower::config::Config;
use stower::{WatchEvent, WatchUseCase};

use super::{resolve_settings, select_mapper};

pub fn cmd_watch(config: &Config) -> Result<()> {
    let settings = resolve_settings(config)?;
    let mapper = select_mapper(&settings)?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    WatchUseCase::new(settings, mapper).start(running, |event| {
        if let WatchEvent::Draining = event {
            info!("interrupted, finishing queued events");
        }
    })?;

    Ok(())
}
