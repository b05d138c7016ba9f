//! Monitor timing and drain configuration.

use std::time::Duration;

use openlatch_stream::record::DRAIN_CHUNK_RECORDS;

use crate::error::{MonitorError, MonitorResult};

/// Timing and drain parameters for the monitoring loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Records consumed by one drain read. Capped at
    /// [`DRAIN_CHUNK_RECORDS`].
    pub drain_chunk: usize,

    /// Tick deadline for the confirmation wait. Bounds how long the stream
    /// can go undrained while waiting on the operator.
    pub confirm_tick: Duration,

    /// Idle pause between trip-status polls.
    pub trip_poll_idle: Duration,
}

impl MonitorConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> MonitorConfigBuilder {
        MonitorConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the drain chunk is zero or oversized, or a tick
    /// is zero.
    pub fn validate(&self) -> MonitorResult<()> {
        if self.drain_chunk == 0 || self.drain_chunk > DRAIN_CHUNK_RECORDS {
            return Err(MonitorError::invalid_configuration(
                "drain_chunk must be between 1 and the chunk bound",
            ));
        }
        if self.confirm_tick.is_zero() {
            return Err(MonitorError::invalid_configuration(
                "confirm_tick must be non-zero",
            ));
        }
        if self.trip_poll_idle.is_zero() {
            return Err(MonitorError::invalid_configuration(
                "trip_poll_idle must be non-zero",
            ));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            drain_chunk: DRAIN_CHUNK_RECORDS,
            confirm_tick: Duration::from_millis(50),
            trip_poll_idle: Duration::from_millis(25),
        }
    }
}

/// Builder for `MonitorConfig`.
#[derive(Debug, Default)]
pub struct MonitorConfigBuilder {
    config: MonitorConfig,
}

impl MonitorConfigBuilder {
    /// Set the drain chunk size in records.
    #[must_use]
    pub fn drain_chunk(mut self, records: usize) -> Self {
        self.config.drain_chunk = records;
        self
    }

    /// Set the confirmation wait tick.
    #[must_use]
    pub fn confirm_tick(mut self, tick: Duration) -> Self {
        self.config.confirm_tick = tick;
        self
    }

    /// Set the trip-poll idle pause.
    #[must_use]
    pub fn trip_poll_idle(mut self, idle: Duration) -> Self {
        self.config.trip_poll_idle = idle;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> MonitorResult<MonitorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
