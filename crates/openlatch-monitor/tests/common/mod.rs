//! Shared fakes for driving the lifecycle without hardware or a console.

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use openlatch_latch::prelude::*;
use openlatch_monitor::prelude::*;
use openlatch_stream::prelude::*;

/// Latch fake with scripted failures and a trip that fires after a set
/// number of status polls.
#[derive(Debug, Default)]
pub struct ScriptedLatch {
    /// Every lifecycle call, in order.
    pub calls: Vec<&'static str>,
    /// Fail the initialize call.
    pub fail_initialize: bool,
    /// Fail the arm call.
    pub fail_arm: bool,
    /// Fail this many rearm calls before succeeding.
    pub fail_rearm_times: usize,
    /// Status polls that answer false before the trip is reported.
    pub polls_before_trip: usize,
    /// Trip-status polls observed so far.
    pub polls: Cell<usize>,
    /// Current phase.
    pub phase: Cell<LatchPhase>,
    /// Successful re-arms.
    pub rearms: u64,
}

impl ScriptedLatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LatchController for ScriptedLatch {
    fn initialize(&mut self, _config: &LatchConfig) -> LatchResult<()> {
        self.calls.push("initialize");
        if self.fail_initialize {
            return Err(LatchError::hardware_fault("initialize refused"));
        }
        self.phase.set(LatchPhase::Idle);
        Ok(())
    }

    fn arm(&mut self) -> LatchResult<()> {
        self.calls.push("arm");
        if self.fail_arm {
            return Err(LatchError::hardware_fault("arm refused"));
        }
        self.phase.set(LatchPhase::Armed);
        Ok(())
    }

    fn rearm(&mut self) -> LatchResult<()> {
        self.calls.push("rearm");
        if self.fail_rearm_times > 0 {
            self.fail_rearm_times -= 1;
            return Err(LatchError::hardware_fault("rearm refused"));
        }
        self.phase.set(LatchPhase::Armed);
        self.rearms += 1;
        Ok(())
    }

    fn disarm(&mut self) -> LatchResult<()> {
        self.calls.push("disarm");
        self.phase.set(LatchPhase::Idle);
        Ok(())
    }

    fn is_tripped(&self) -> bool {
        match self.phase.get() {
            LatchPhase::Tripped => true,
            LatchPhase::Armed => {
                let seen = self.polls.get();
                self.polls.set(seen + 1);
                if seen >= self.polls_before_trip {
                    self.phase.set(LatchPhase::Tripped);
                    true
                } else {
                    false
                }
            }
            LatchPhase::Uninit | LatchPhase::Idle => false,
        }
    }

    fn phase(&self) -> LatchPhase {
        self.phase.get()
    }

    fn metrics(&self) -> LatchMetrics {
        LatchMetrics {
            rearm_count: self.rearms,
            ..LatchMetrics::default()
        }
    }
}

/// Wait point that replays a wake script and cancels the run once the
/// script is exhausted, so the driver's forever loop unwinds.
#[derive(Debug)]
pub struct DriverWait {
    wakes: VecDeque<Wake>,
    cancel: CancelToken,
    /// Multiplexed waits performed.
    pub waits: usize,
    /// Control-channel discards performed.
    pub discards: usize,
    /// Idle pauses performed.
    pub pauses: usize,
}

impl DriverWait {
    pub fn new(wakes: impl IntoIterator<Item = Wake>, cancel: CancelToken) -> Self {
        Self {
            wakes: wakes.into_iter().collect(),
            cancel,
            waits: 0,
            discards: 0,
            pauses: 0,
        }
    }
}

impl WaitPoint for DriverWait {
    fn wait(&mut self, _tick: Duration) -> StreamResult<Wake> {
        self.waits += 1;
        match self.wakes.pop_front() {
            Some(wake) => Ok(wake),
            None => {
                self.cancel.cancel();
                Ok(Wake::TIMEOUT)
            }
        }
    }

    fn discard_control(&mut self) -> StreamResult<usize> {
        self.discards += 1;
        Ok(1)
    }

    fn pause(&mut self, _idle: Duration) {
        self.pauses += 1;
    }
}
