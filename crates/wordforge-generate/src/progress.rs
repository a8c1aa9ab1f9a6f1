//! Progress reporting decoupled from any presentation layer.

use std::time::{Duration, Instant};

/// Snapshot handed to a [`ProgressSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Lines written so far.
    pub processed: u64,
    /// Expected total, when known and representable.
    pub total: Option<u128>,
    /// Candidate length currently being produced (the suffix length for
    /// enumeration, the drawn length for sampling).
    pub tier: usize,
}

/// Receives progress updates from a running generator.
///
/// Updates arrive at a bounded rate; implementations may render them but
/// cannot influence what is written.
pub trait ProgressSink {
    fn report(&mut self, update: &ProgressUpdate);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressUpdate),
{
    fn report(&mut self, update: &ProgressUpdate) {
        self(update)
    }
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _update: &ProgressUpdate) {}
}

/// Minimum spacing between intermediate updates.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(10);

/// Items between clock reads.
const CHECK_EVERY: u64 = 4096;

/// Rate limiter for intermediate updates.
pub(crate) struct Throttle {
    last: Instant,
    ticks: u64,
}

impl Throttle {
    pub(crate) fn new() -> Self {
        Self {
            last: Instant::now(),
            ticks: 0,
        }
    }

    /// Count one item; true when an update is due.
    pub(crate) fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks % CHECK_EVERY != 0 {
            return false;
        }
        let now = Instant::now();
        if now.duration_since(self.last) < REPORT_INTERVAL {
            return false;
        }
        self.last = now;
        true
    }
}
