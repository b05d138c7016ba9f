//! Latch phase machine and metrics.
//!
//! Transitions are atomic compare-and-swap operations so a controller can be
//! shared behind an immutable handle without additional locking.

use portable_atomic::{AtomicU32, Ordering};

/// Latch lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum LatchPhase {
    /// The controller has not been initialized.
    #[default]
    Uninit = 0,
    /// Initialized, output released, not yet armed.
    Idle = 1,
    /// Output driven to the untripped level, watching for the trigger.
    Armed = 2,
    /// The analog watchdog fired and the output is latched.
    Tripped = 3,
}

impl LatchPhase {
    /// Convert from raw u32 value.
    #[must_use]
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Uninit),
            1 => Some(Self::Idle),
            2 => Some(Self::Armed),
            3 => Some(Self::Tripped),
            _ => None,
        }
    }

    /// Convert to raw u32 value.
    #[must_use]
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    /// Check whether the latch is watching or already latched.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Armed | Self::Tripped)
    }

    /// Get the phase as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninit => "Uninit",
            Self::Idle => "Idle",
            Self::Armed => "Armed",
            Self::Tripped => "Tripped",
        }
    }
}

impl std::fmt::Display for LatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Atomic phase holder for the latch lifecycle.
///
/// All transitions are lock-free and allocation-free. A failed transition
/// reports the phase that was actually observed.
#[derive(Debug)]
pub struct LatchState {
    /// Current phase.
    phase: AtomicU32,
    /// Number of successful arms.
    arm_count: AtomicU32,
    /// Number of successful re-arms.
    rearm_count: AtomicU32,
    /// Number of observed trips.
    trip_count: AtomicU32,
}

impl LatchState {
    /// Create a new state in the `Uninit` phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: AtomicU32::new(LatchPhase::Uninit.to_raw()),
            arm_count: AtomicU32::new(0),
            rearm_count: AtomicU32::new(0),
            trip_count: AtomicU32::new(0),
        }
    }

    /// Get the current phase.
    #[must_use]
    pub fn phase(&self) -> LatchPhase {
        let raw = self.phase.load(Ordering::Acquire);
        LatchPhase::from_raw(raw).unwrap_or(LatchPhase::Uninit)
    }

    fn transition(
        &self,
        from: LatchPhase,
        to: LatchPhase,
    ) -> Result<(), crate::error::LatchError> {
        let previous = self.phase.compare_exchange(
            from.to_raw(),
            to.to_raw(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );

        match previous {
            Ok(_) => Ok(()),
            Err(current) => {
                let current_phase = LatchPhase::from_raw(current).unwrap_or(LatchPhase::Uninit);
                Err(crate::error::LatchError::invalid_transition(
                    current_phase.as_str(),
                    to.as_str(),
                ))
            }
        }
    }

    /// Attempt to transition from `Uninit` to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase is not `Uninit`.
    pub fn initialize(&self) -> Result<(), crate::error::LatchError> {
        self.transition(LatchPhase::Uninit, LatchPhase::Idle)
    }

    /// Attempt to transition from `Idle` to `Armed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase is not `Idle`.
    pub fn arm(&self) -> Result<(), crate::error::LatchError> {
        self.transition(LatchPhase::Idle, LatchPhase::Armed)?;
        self.arm_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Attempt to transition from `Armed` to `Tripped`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase is not `Armed`.
    pub fn trip(&self) -> Result<(), crate::error::LatchError> {
        self.transition(LatchPhase::Armed, LatchPhase::Tripped)?;
        self.trip_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Attempt to transition from `Tripped` back to `Armed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase is not `Tripped`.
    pub fn rearm(&self) -> Result<(), crate::error::LatchError> {
        self.transition(LatchPhase::Tripped, LatchPhase::Armed)?;
        self.rearm_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Attempt to release the latch back to `Idle`.
    ///
    /// Allowed from `Armed` or `Tripped`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current phase is `Uninit` or `Idle`.
    pub fn disarm(&self) -> Result<(), crate::error::LatchError> {
        let current = self.phase();
        match current {
            LatchPhase::Armed | LatchPhase::Tripped => {
                self.transition(current, LatchPhase::Idle)
            }
            LatchPhase::Uninit | LatchPhase::Idle => Err(
                crate::error::LatchError::invalid_transition(current.as_str(), "Idle"),
            ),
        }
    }

    /// Reset to `Uninit`, clearing nothing but the phase.
    pub fn reset(&self) {
        self.phase
            .store(LatchPhase::Uninit.to_raw(), Ordering::Release);
    }

    /// Get the arm count.
    #[must_use]
    pub fn arm_count(&self) -> u32 {
        self.arm_count.load(Ordering::Acquire)
    }

    /// Get the re-arm count.
    #[must_use]
    pub fn rearm_count(&self) -> u32 {
        self.rearm_count.load(Ordering::Acquire)
    }

    /// Get the trip count.
    #[must_use]
    pub fn trip_count(&self) -> u32 {
        self.trip_count.load(Ordering::Acquire)
    }
}

impl Default for LatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Latch metrics snapshot for monitoring and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatchMetrics {
    /// Total successful arm operations.
    pub arm_count: u64,
    /// Total successful re-arm operations.
    pub rearm_count: u64,
    /// Total observed trips.
    pub trip_count: u64,
    /// Total failed re-arm attempts.
    pub rearm_failures: u64,
}

impl LatchMetrics {
    /// Create a new metrics instance with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful arm.
    pub fn record_arm(&mut self) {
        self.arm_count = self.arm_count.saturating_add(1);
    }

    /// Record a successful re-arm.
    pub fn record_rearm(&mut self) {
        self.rearm_count = self.rearm_count.saturating_add(1);
    }

    /// Record an observed trip.
    pub fn record_trip(&mut self) {
        self.trip_count = self.trip_count.saturating_add(1);
    }

    /// Record a failed re-arm attempt.
    pub fn record_rearm_failure(&mut self) {
        self.rearm_failures = self.rearm_failures.saturating_add(1);
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
