//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::application::pipeline::PlacementPipeline;
use crate::application::report::RunReport;
use crate::config::Settings;
use crate::domain::ports::PathMapper;
use crate::error::{StowerError, StowerResult};

use super::event::{classify, FileEvent, WatchEvent};
use super::queue::{event_queue, EventReceiver};

/// How often the loop checks the running flag while the queue is idle
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Watch Use Case
///
/// Places files as they are created or written below the source root.
/// This is the main entry point for the `stower watch` command.
pub struct WatchUseCase {
    settings: Settings,
    mapper: Arc<dyn PathMapper>,
}

impl WatchUseCase {
    pub fn new(settings: Settings, mapper: Arc<dyn PathMapper>) -> Self {
        Self { settings, mapper }
    }

    /// Start watching (blocking)
    ///
    /// Runs until `running` is cleared, then processes the events still
    /// queued and deregisters the notifications.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> StowerResult<RunReport>
    where
        F: Fn(WatchEvent),
    {
        let source_root = self.prepare_source_root()?;
        let (sender, receiver) = event_queue(self.settings.event_buffer_size);

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for file_event in classify(&event) {
                        sender.push(file_event);
                    }
                }
                Err(e) => warn!("file watch error: {}", e),
            },
            notify::Config::default(),
        )
        .map_err(|source| StowerError::Watch {
            path: source_root.clone(),
            source,
        })?;

        watcher
            .watch(&source_root, RecursiveMode::Recursive)
            .map_err(|source| StowerError::Watch {
                path: source_root.clone(),
                source,
            })?;

        let pipeline =
            PlacementPipeline::new(&self.settings, source_root.clone(), Arc::clone(&self.mapper));
        info!(
            source = %source_root.display(),
            destination = %pipeline.destination_root().display(),
            mapper = pipeline.mapper().name(),
            capacity = self.settings.event_buffer_size,
            "watching source directory"
        );
        on_event(WatchEvent::Started {
            source: source_root,
        });

        let mut report = RunReport::new();
        while running.load(Ordering::SeqCst) {
            match receiver.pop_timeout(POLL_INTERVAL) {
                Ok(event) => handle(&pipeline, event, &mut report, &on_event),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        on_event(WatchEvent::Draining);
        // Dropping the watcher deregisters it and releases the last sender.
        drop(watcher);
        drain(&pipeline, &receiver, &mut report, &on_event);

        report.dropped_events = receiver.dropped();
        info!("{}", report);
        on_event(WatchEvent::Stopped {
            report: report.clone(),
        });
        Ok(report)
    }

    fn prepare_source_root(&self) -> StowerResult<PathBuf> {
        let root = &self.settings.source_root;
        if !root.exists() {
            info!(source = %root.display(), "creating source directory");
            std::fs::create_dir_all(root)?;
        }
        Ok(root.canonicalize()?)
    }
}

fn handle<F>(pipeline: &PlacementPipeline, event: FileEvent, report: &mut RunReport, on_event: &F)
where
    F: Fn(WatchEvent),
{
    debug!(path = %event.path.display(), kind = %event.kind, "file event");
    let outcome = pipeline.process_file(&event.path);
    report.record(&outcome);
    on_event(WatchEvent::Processed { event, outcome });
}

fn drain<F>(
    pipeline: &PlacementPipeline,
    receiver: &EventReceiver,
    report: &mut RunReport,
    on_event: &F,
) where
    F: Fn(WatchEvent),
{
    while let Some(event) = receiver.try_pop() {
        handle(pipeline, event, report, on_event);
    }
}
