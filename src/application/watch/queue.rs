//! Bounded event queue
//!
//! The notification thread pushes without ever blocking: when the queue is
//! full the new event is discarded and counted. A later batch run recovers
//! files whose events were lost.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use super::event::FileEvent;

/// Create a queue holding at most `capacity` events (at least one).
pub fn event_queue(capacity: usize) -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity.max(1));
    let dropped = Arc::new(AtomicU64::new(0));
    (
        EventSender {
            tx,
            dropped: Arc::clone(&dropped),
        },
        EventReceiver { rx, dropped },
    )
}

#[derive(Debug, Clone)]
pub struct EventSender {
    tx: SyncSender<FileEvent>,
    dropped: Arc<AtomicU64>,
}

impl EventSender {
    /// Queue `event`; returns false if it was dropped.
    pub fn push(&self, event: FileEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                warn!(
                    path = %event.path.display(),
                    kind = %event.kind,
                    dropped,
                    "event queue full, dropping event"
                );
                false
            }
            // Receiver gone: the watch loop has stopped.
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

#[derive(Debug)]
pub struct EventReceiver {
    rx: Receiver<FileEvent>,
    dropped: Arc<AtomicU64>,
}

impl EventReceiver {
    /// Block until an event arrives; `None` once every sender is gone.
    pub fn pop(&self) -> Option<FileEvent> {
        self.rx.recv().ok()
    }

    pub fn pop_timeout(&self, timeout: Duration) -> Result<FileEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn try_pop(&self) -> Option<FileEvent> {
        self.rx.try_recv().ok()
    }

    /// Events discarded so far because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
