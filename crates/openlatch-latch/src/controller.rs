//! Latch controller trait definition.

use crate::config::LatchConfig;
use crate::error::LatchResult;
use crate::state::{LatchMetrics, LatchPhase};

/// Controller for an analog-watchdog-triggered hardware latch.
///
/// The latch is a singleton board resource; implementations wrap whatever
/// glue programs the timer/comparator pair. Callers own the sequencing:
/// `initialize` once, then `arm`, then `rearm` after each observed trip.
///
/// # Phase Machine
///
/// ```text
/// Uninit ──initialize()──► Idle ──arm()──► Armed ──(hardware)──► Tripped
///                            ▲                ▲                      │
///                            │                └───────rearm()───────┘
///                            └──────────disarm()─────────────────────┘
/// ```
///
/// # Implementation Requirements
///
/// 1. `is_tripped()` MUST be side-effect-free and cheap enough to poll
///    dozens of times per second.
/// 2. `arm()` MUST drive the output to the untripped level before returning.
/// 3. `rearm()` MUST only succeed after the latch has tripped.
pub trait LatchController {
    /// Program the timer/comparator pair and take ownership of the latch.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the board glue
    /// rejects it. Callers treat this as fatal.
    fn initialize(&mut self, config: &LatchConfig) -> LatchResult<()>;

    /// Arm the latch, driving the output to the untripped level.
    ///
    /// # Errors
    ///
    /// Returns an error if the latch is not initialized and idle, or the
    /// hardware refuses. Callers treat this as fatal.
    fn arm(&mut self) -> LatchResult<()>;

    /// Re-arm after a trip, driving the output back to the untripped level.
    ///
    /// # Errors
    ///
    /// Returns an error if the latch never tripped or the hardware refuses.
    /// Re-arm failures are recoverable; callers retry at operator pace.
    fn rearm(&mut self) -> LatchResult<()>;

    /// Release the latch without waiting for a trip.
    ///
    /// Unused by the normal monitoring flow; kept for symmetry and tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the latch is not armed or tripped.
    fn disarm(&mut self) -> LatchResult<()>;

    /// Whether the analog watchdog has fired since the last arm.
    ///
    /// Side-effect-free query, safe to poll in a tight loop.
    fn is_tripped(&self) -> bool;

    /// Current lifecycle phase.
    fn phase(&self) -> LatchPhase;

    /// Snapshot of the controller's counters.
    fn metrics(&self) -> LatchMetrics;
}
