//! Watch event types

use std::fmt;
use std::path::PathBuf;

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};

use crate::application::pipeline::FileOutcome;
use crate::application::report::RunReport;

/// File change kinds that trigger placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    Create,
    Write,
}

impl fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileEventKind::Create => write!(f, "create"),
            FileEventKind::Write => write!(f, "write"),
        }
    }
}

/// One queued change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub kind: FileEventKind,
    pub path: PathBuf,
}

impl FileEvent {
    pub fn new(kind: FileEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Reduce a notification to the file events worth queueing.
///
/// Creation, and a rename's destination, count as `Create`; data changes
/// count as `Write`. Everything else (access, metadata, removal) is dropped.
pub fn classify(event: &Event) -> Vec<FileEvent> {
    let kind = match event.kind {
        EventKind::Create(_) => FileEventKind::Create,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => FileEventKind::Create,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => {
            FileEventKind::Write
        }
        _ => return Vec::new(),
    };
    event
        .paths
        .iter()
        .map(|path| FileEvent::new(kind, path.clone()))
        .collect()
}

/// Progress reported to the caller of `WatchUseCase::start`
#[derive(Debug)]
pub enum WatchEvent {
    /// Notifications are registered for the source root
    Started { source: PathBuf },
    /// A queued event went through the pipeline
    Processed { event: FileEvent, outcome: FileOutcome },
    /// Stop requested; queued events are being processed
    Draining,
    /// Notifications are deregistered
    Stopped { report: RunReport },
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, AccessMode, CreateKind, DataChange, MetadataKind, RemoveKind};

    fn event(kind: EventKind) -> Event {
        Event::new(kind).add_path(PathBuf::from("/src/a.txt"))
    }

    #[test]
    fn create_and_data_changes_are_kept() {
        assert_eq!(
            classify(&event(EventKind::Create(CreateKind::File))),
            vec![FileEvent::new(FileEventKind::Create, "/src/a.txt")]
        );
        assert_eq!(
            classify(&event(EventKind::Modify(ModifyKind::Data(DataChange::Content)))),
            vec![FileEvent::new(FileEventKind::Write, "/src/a.txt")]
        );
        assert_eq!(
            classify(&event(EventKind::Modify(ModifyKind::Any))),
            vec![FileEvent::new(FileEventKind::Write, "/src/a.txt")]
        );
    }

    #[test]
    fn rename_destination_counts_as_create() {
        assert_eq!(
            classify(&event(EventKind::Modify(ModifyKind::Name(RenameMode::To)))),
            vec![FileEvent::new(FileEventKind::Create, "/src/a.txt")]
        );
        assert!(classify(&event(EventKind::Modify(ModifyKind::Name(RenameMode::From)))).is_empty());
    }

    #[test]
    fn other_kinds_are_dropped() {
        let ignored = [
            EventKind::Remove(RemoveKind::File),
            EventKind::Access(AccessKind::Close(AccessMode::Write)),
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
            EventKind::Any,
            EventKind::Other,
        ];
        for kind in ignored {
            assert!(classify(&event(kind)).is_empty());
        }
    }
}
