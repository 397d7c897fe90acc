//! Run report
//!
//! Tallies pipeline outcomes for the end-of-run summary.

use std::fmt;
use std::path::PathBuf;

use super::pipeline::FileOutcome;

/// Counts of what happened to each file seen during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files transferred (or that would be, in a dry run)
    pub placed: usize,
    /// Files whose destination was removed before the transfer
    pub replaced: usize,
    /// Files already in place
    pub already_placed: usize,
    pub ignored: usize,
    /// Paths skipped because of a failure
    pub failed: Vec<PathBuf>,
    /// Events dropped because the queue was full (watch mode only)
    pub dropped_events: u64,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Placed { replaced, .. } => {
                self.placed += 1;
                if *replaced {
                    self.replaced += 1;
                }
            }
            FileOutcome::AlreadyPlaced { .. } => self.already_placed += 1,
            FileOutcome::Ignored { .. } => self.ignored += 1,
            FileOutcome::Failed { path, .. } => self.failed.push(path.clone()),
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Files that reached the pipeline
    pub fn total(&self) -> usize {
        self.placed + self.already_placed + self.ignored + self.failed.len()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} placed ({} replaced), {} already in place, {} ignored, {} failed",
            self.total(),
            self.placed,
            self.replaced,
            self.already_placed,
            self.ignored,
            self.failed.len()
        )?;
        if self.dropped_events > 0 {
            write!(f, ", {} events dropped", self.dropped_events)?;
        }
        Ok(())
    }
}
