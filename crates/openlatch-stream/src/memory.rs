//! Deterministic in-memory stand-ins for the hardware-backed types.
//!
//! `MemorySource` scripts record availability; `ScriptedWaitPoint` scripts
//! wake outcomes. Both record every call so tests can assert bounded-work
//! properties instead of timing behavior.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{StreamError, StreamResult};
use crate::record::SampleRecord;
use crate::source::SampleSource;
use crate::wait::{WaitPoint, Wake};

/// In-memory sample source with scripted availability.
#[derive(Debug, Default)]
pub struct MemorySource {
    available: usize,
    closed: bool,
    read_sizes: Vec<usize>,
}

impl MemorySource {
    /// Create an open source with nothing buffered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open source with `records` already buffered.
    #[must_use]
    pub fn with_records(records: usize) -> Self {
        Self {
            available: records,
            ..Self::default()
        }
    }

    /// Buffer `records` more records.
    pub fn push_records(&mut self, records: usize) {
        self.available = self.available.saturating_add(records);
    }

    /// Mark the handle closed; further reads fail.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Records still buffered.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Size of every read performed, in call order.
    #[must_use]
    pub fn read_sizes(&self) -> &[usize] {
        &self.read_sizes
    }

    /// Total records consumed across all reads.
    #[must_use]
    pub fn total_read(&self) -> usize {
        self.read_sizes.iter().sum()
    }
}

impl SampleSource for MemorySource {
    fn is_open(&self) -> bool {
        !self.closed
    }

    fn poll_ready(&self) -> bool {
        !self.closed && self.available > 0
    }

    fn read_records(&mut self, buf: &mut [SampleRecord]) -> StreamResult<usize> {
        if self.closed {
            return Err(StreamError::Closed);
        }

        let records = buf.len().min(self.available);
        for slot in buf.iter_mut().take(records) {
            *slot = SampleRecord::default();
        }
        self.available -= records;
        self.read_sizes.push(records);
        Ok(records)
    }
}

/// Wait point that replays a scripted sequence of wakes.
///
/// Once the script is exhausted, every further wait reports the control
/// channel ready so a waiting loop terminates instead of hanging the test.
#[derive(Debug)]
pub struct ScriptedWaitPoint {
    wakes: VecDeque<Wake>,
    discards: usize,
    pauses: Vec<Duration>,
    wait_count: usize,
}

impl ScriptedWaitPoint {
    /// Create a wait point replaying `wakes` in order.
    #[must_use]
    pub fn new(wakes: impl IntoIterator<Item = Wake>) -> Self {
        Self {
            wakes: wakes.into_iter().collect(),
            discards: 0,
            pauses: Vec::new(),
            wait_count: 0,
        }
    }

    /// Number of control-channel discards performed.
    #[must_use]
    pub fn discards(&self) -> usize {
        self.discards
    }

    /// Every pause requested, in call order.
    #[must_use]
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Number of multiplexed waits performed.
    #[must_use]
    pub fn wait_count(&self) -> usize {
        self.wait_count
    }
}

impl WaitPoint for ScriptedWaitPoint {
    fn wait(&mut self, _tick: Duration) -> StreamResult<Wake> {
        self.wait_count += 1;
        Ok(self.wakes.pop_front().unwrap_or_else(Wake::control))
    }

    fn discard_control(&mut self) -> StreamResult<usize> {
        self.discards += 1;
        Ok(1)
    }

    fn pause(&mut self, idle: Duration) {
        self.pauses.push(idle);
    }
}
