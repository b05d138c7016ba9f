//! Lifecycle driver.
//!
//! Sequences the latch through initialize, arm, trip, and the operator-paced
//! re-arm loop, interleaving stream drains through the waiting primitives.

use tracing::{info, warn};

use openlatch_latch::config::LatchConfig;
use openlatch_latch::controller::LatchController;
use openlatch_stream::source::SampleSource;
use openlatch_stream::wait::WaitPoint;

use crate::cancel::CancelToken;
use crate::config::MonitorConfig;
use crate::confirm::{Confirmation, wait_for_confirmation};
use crate::error::{MonitorError, MonitorResult};
use crate::trip::{TripWait, wait_for_trip};

const ARM_PROMPT: &str = "Press ENTER to ARM (drive HIGH). Trip the watchdog to latch LOW.";
const REARM_PROMPT: &str = "Press ENTER to RE-ARM (drive HIGH again). Ctrl-C to exit.";

/// Drives the full latch lifecycle over injected collaborators.
///
/// The driver owns the latch controller, the sample source, and the wait
/// point; nothing else touches them while it runs. Failure policy:
/// initialize and arm failures are fatal and surface as errors (the source
/// handle is released as the driver unwinds), re-arm failures are reported
/// and retried at operator pace, and cancellation at any wait exits cleanly.
#[derive(Debug)]
pub struct LifecycleDriver<L, S, W> {
    latch: L,
    source: S,
    wait: W,
    latch_config: LatchConfig,
    config: MonitorConfig,
    cancel: CancelToken,
}

impl<L, S, W> LifecycleDriver<L, S, W>
where
    L: LatchController,
    S: SampleSource,
    W: WaitPoint,
{
    /// Create a driver over the given collaborators.
    pub fn new(
        latch: L,
        source: S,
        wait: W,
        latch_config: LatchConfig,
        config: MonitorConfig,
    ) -> Self {
        Self {
            latch,
            source,
            wait,
            latch_config,
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Replace the driver's cancellation token with a shared one.
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// A clone of the driver's cancellation token.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The latch controller, for inspection after a run.
    pub fn latch(&self) -> &L {
        &self.latch
    }

    /// The sample source, for inspection after a run.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The wait point, for inspection after a run.
    pub fn wait_point(&self) -> &W {
        &self.wait
    }

    /// Run the lifecycle until cancelled or a fatal failure.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::InitializeFailed`] or
    /// [`MonitorError::ArmFailed`] on the fatal paths, or a stream error if
    /// the readiness primitive fails.
    pub fn run(&mut self) -> MonitorResult<()> {
        let cfg = &self.latch_config;
        println!(
            "latch monitor: TIM{} CH{} <= AWD{}, ARR=0x{:08X} CCR={}",
            cfg.timer, cfg.channel, cfg.watchdog, cfg.auto_reload, cfg.compare
        );

        self.latch
            .initialize(&self.latch_config)
            .map_err(MonitorError::InitializeFailed)?;
        info!("latch initialized");

        match wait_for_confirmation(
            &mut self.wait,
            &mut self.source,
            ARM_PROMPT,
            &self.config,
            &self.cancel,
        )? {
            Confirmation::Cancelled => return Ok(()),
            Confirmation::Received => {}
        }

        self.latch.arm().map_err(MonitorError::ArmFailed)?;
        println!("Armed. Output is HIGH; waiting for the watchdog...");

        match wait_for_trip(
            &self.latch,
            &mut self.wait,
            &mut self.source,
            &self.config,
            &self.cancel,
        ) {
            TripWait::Cancelled => return Ok(()),
            TripWait::Tripped => {
                println!("Watchdog TRIPPED: output latched LOW.");
                info!("trip observed");
            }
        }

        loop {
            match wait_for_confirmation(
                &mut self.wait,
                &mut self.source,
                REARM_PROMPT,
                &self.config,
                &self.cancel,
            )? {
                Confirmation::Cancelled => return Ok(()),
                Confirmation::Received => {}
            }

            match self.latch.rearm() {
                Ok(()) => println!("Re-armed. Output is HIGH again."),
                Err(err) => {
                    warn!(%err, "re-arm failed");
                    println!("Re-arm failed: {err}");
                }
            }
        }
    }
}
