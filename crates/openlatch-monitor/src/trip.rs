//! Trip-wait loop.

use openlatch_latch::controller::LatchController;
use openlatch_stream::source::SampleSource;
use openlatch_stream::wait::WaitPoint;

use crate::cancel::CancelToken;
use crate::config::MonitorConfig;
use crate::drain::drain_nonblocking;

/// How a trip wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripWait {
    /// The latch reported tripped.
    Tripped,
    /// Cancellation was requested before a trip was observed.
    Cancelled,
}

/// Poll the latch's trip status until it reports tripped.
///
/// Each iteration drains the sample stream once and then pauses for the
/// configured idle, bounding CPU while keeping the acquisition buffers
/// empty. There is no wait bound: the trip is a physical event outside this
/// process's control, and only cancellation cuts the loop short.
pub fn wait_for_trip<L, W, S>(
    latch: &L,
    wait: &mut W,
    source: &mut S,
    config: &MonitorConfig,
    cancel: &CancelToken,
) -> TripWait
where
    L: LatchController + ?Sized,
    W: WaitPoint,
    S: SampleSource,
{
    loop {
        if cancel.is_cancelled() {
            return TripWait::Cancelled;
        }
        if latch.is_tripped() {
            return TripWait::Tripped;
        }

        drain_nonblocking(source, config.drain_chunk);
        wait.pause(config.trip_poll_idle);
    }
}
