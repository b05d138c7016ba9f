//! Console-gated wait.

use tracing::debug;

use openlatch_stream::source::SampleSource;
use openlatch_stream::wait::WaitPoint;

use crate::cancel::CancelToken;
use crate::config::MonitorConfig;
use crate::drain::drain_nonblocking;
use crate::error::MonitorResult;

/// How a confirmation wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The operator confirmed on the control channel.
    Received,
    /// Cancellation was requested before a confirmation arrived.
    Cancelled,
}

/// Emit `prompt` once, then wait for a confirmation line while keeping the
/// sample stream drained.
///
/// One multiplexed wait per tick; on each wake the source is drained if it
/// was ready, and any pending control bytes end the wait. A tick that
/// expires with neither interest ready still drains, covering data that
/// arrived between registration and wake and rate-limiting drains to one
/// chunk per tick. This is the flow's single suspension point. Cancellation
/// is observed before each wait and again on wake, before any dispatch.
///
/// Any bytes on the control channel count as a confirmation; partial lines
/// are not distinguished from complete ones.
///
/// # Errors
///
/// Returns an error only if the readiness primitive itself fails.
pub fn wait_for_confirmation<W, S>(
    wait: &mut W,
    source: &mut S,
    prompt: &str,
    config: &MonitorConfig,
    cancel: &CancelToken,
) -> MonitorResult<Confirmation>
where
    W: WaitPoint,
    S: SampleSource,
{
    println!("{prompt}");

    loop {
        if cancel.is_cancelled() {
            return Ok(Confirmation::Cancelled);
        }

        let wake = wait.wait(config.confirm_tick)?;

        if cancel.is_cancelled() {
            return Ok(Confirmation::Cancelled);
        }

        if wake.source_ready {
            drain_nonblocking(source, config.drain_chunk);
        }

        if wake.control_ready {
            if let Err(err) = wait.discard_control() {
                debug!(%err, "control discard failed");
            }
            return Ok(Confirmation::Received);
        }

        if wake.is_timeout() {
            drain_nonblocking(source, config.drain_chunk);
        }
    }
}
