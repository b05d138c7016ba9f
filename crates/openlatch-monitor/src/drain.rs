//! Sensor drain loop.

use tracing::{debug, trace};

use openlatch_stream::record::{DRAIN_CHUNK_RECORDS, SampleRecord};
use openlatch_stream::source::SampleSource;

/// Drain any ready samples without blocking.
///
/// Zero-timeout readiness check, then at most one bounded read of up to
/// `max_records` (capped at [`DRAIN_CHUNK_RECORDS`]) into a stack chunk that
/// is immediately discarded. A closed handle is a no-op, and read failures
/// are swallowed: losing samples here is fine, they were headed for the
/// floor anyway.
///
/// Returns the number of records discarded.
pub fn drain_nonblocking<S: SampleSource>(source: &mut S, max_records: usize) -> usize {
    if !source.is_open() {
        return 0;
    }
    if !source.poll_ready() {
        return 0;
    }

    let mut chunk = [SampleRecord::default(); DRAIN_CHUNK_RECORDS];
    let limit = max_records.clamp(1, DRAIN_CHUNK_RECORDS);

    match source.read_records(&mut chunk[..limit]) {
        Ok(records) => {
            if records > 0 {
                trace!(records, "drained");
            }
            records
        }
        Err(err) => {
            debug!(%err, "drain read failed");
            0
        }
    }
}
