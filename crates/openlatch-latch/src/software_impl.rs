//! Software latch implementation.
//!
//! `SoftwareLatch` drives the phase machine without any board glue. It stands
//! in for the hardware during tests and on machines without the latch fitted,
//! with hooks to inject trips and hardware faults.

use crate::config::LatchConfig;
use crate::controller::LatchController;
use crate::error::{LatchError, LatchResult};
use crate::state::{LatchMetrics, LatchPhase, LatchState};

/// Operation selector for scripted fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOp {
    /// Fail the next `initialize` call.
    Initialize,
    /// Fail the next `arm` call.
    Arm,
    /// Fail the next `rearm` call.
    Rearm,
    /// Fail the next `disarm` call.
    Disarm,
}

/// Software-only latch controller.
///
/// # Example
///
/// ```rust
/// use openlatch_latch::prelude::*;
///
/// let mut latch = SoftwareLatch::new();
/// latch.initialize(&LatchConfig::default()).expect("Failed to initialize");
/// latch.arm().expect("Failed to arm");
/// latch.inject_trip().expect("Failed to trip");
/// assert!(latch.is_tripped());
/// ```
#[derive(Debug, Default)]
pub struct SoftwareLatch {
    state: LatchState,
    metrics: LatchMetrics,
    config: Option<LatchConfig>,
    fail_next: Option<FaultOp>,
}

impl SoftwareLatch {
    /// Create a new software latch in the `Uninit` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a hardware fault for the next matching operation.
    pub fn fail_next(&mut self, op: FaultOp) {
        self.fail_next = Some(op);
    }

    /// Simulate the analog watchdog firing.
    ///
    /// # Errors
    ///
    /// Returns an error if the latch is not armed.
    pub fn inject_trip(&mut self) -> LatchResult<()> {
        self.state.trip()?;
        self.metrics.record_trip();
        Ok(())
    }

    /// The configuration passed to `initialize`, if any.
    #[must_use]
    pub fn config(&self) -> Option<&LatchConfig> {
        self.config.as_ref()
    }

    fn take_fault(&mut self, op: FaultOp) -> LatchResult<()> {
        if self.fail_next == Some(op) {
            self.fail_next = None;
            return Err(LatchError::hardware_fault("injected fault"));
        }
        Ok(())
    }
}

impl LatchController for SoftwareLatch {
    fn initialize(&mut self, config: &LatchConfig) -> LatchResult<()> {
        self.take_fault(FaultOp::Initialize)?;
        config.validate()?;
        self.state.initialize()?;
        self.config = Some(*config);
        Ok(())
    }

    fn arm(&mut self) -> LatchResult<()> {
        self.take_fault(FaultOp::Arm)?;
        self.state.arm()?;
        self.metrics.record_arm();
        Ok(())
    }

    fn rearm(&mut self) -> LatchResult<()> {
        if let Err(err) = self.take_fault(FaultOp::Rearm) {
            self.metrics.record_rearm_failure();
            return Err(err);
        }
        if let Err(err) = self.state.rearm() {
            self.metrics.record_rearm_failure();
            return Err(err);
        }
        self.metrics.record_rearm();
        Ok(())
    }

    fn disarm(&mut self) -> LatchResult<()> {
        self.take_fault(FaultOp::Disarm)?;
        self.state.disarm()
    }

    fn is_tripped(&self) -> bool {
        self.state.phase() == LatchPhase::Tripped
    }

    fn phase(&self) -> LatchPhase {
        self.state.phase()
    }

    fn metrics(&self) -> LatchMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> SoftwareLatch {
        let mut latch = SoftwareLatch::new();
        latch
            .initialize(&LatchConfig::default())
            .expect("initialize should succeed");
        latch
    }

    #[test]
    fn test_initialize_stores_config() {
        let latch = initialized();
        assert_eq!(latch.phase(), LatchPhase::Idle);
        assert_eq!(latch.config(), Some(&LatchConfig::default()));
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let mut latch = SoftwareLatch::new();
        let config = LatchConfig {
            timer: 5,
            ..LatchConfig::default()
        };
        assert!(latch.initialize(&config).is_err());
        assert_eq!(latch.phase(), LatchPhase::Uninit);
    }

    #[test]
    fn test_trip_and_rearm_cycle() {
        let mut latch = initialized();
        latch.arm().expect("arm should succeed");
        assert!(!latch.is_tripped());

        latch.inject_trip().expect("trip should succeed");
        assert!(latch.is_tripped());

        latch.rearm().expect("rearm should succeed");
        assert!(!latch.is_tripped());
        assert_eq!(latch.metrics().rearm_count, 1);
    }

    #[test]
    fn test_inject_trip_requires_armed() {
        let mut latch = initialized();
        assert!(latch.inject_trip().is_err());
    }

    #[test]
    fn test_injected_fault_fires_once() {
        let mut latch = initialized();
        latch.fail_next(FaultOp::Arm);

        let result = latch.arm();
        assert!(matches!(result, Err(LatchError::HardwareFault(_))));
        assert_eq!(latch.phase(), LatchPhase::Idle);

        latch.arm().expect("second arm should succeed");
    }

    #[test]
    fn test_rearm_failure_is_counted() {
        let mut latch = initialized();
        latch.arm().expect("arm should succeed");
        latch.inject_trip().expect("trip should succeed");

        latch.fail_next(FaultOp::Rearm);
        assert!(latch.rearm().is_err());
        assert_eq!(latch.metrics().rearm_failures, 1);
        assert!(latch.is_tripped());

        latch.rearm().expect("retry should succeed");
        assert_eq!(latch.metrics().rearm_count, 1);
    }
}
