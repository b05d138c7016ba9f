//! Property-based tests for bounded, non-blocking reads.

#![cfg(test)]

use openlatch_stream::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A read never returns more records than the buffer holds or than were
    /// available, and availability decreases by exactly the amount read.
    #[test]
    fn prop_read_is_bounded(
        available in 0usize..1024,
        buf_len in 1usize..=DRAIN_CHUNK_RECORDS,
        reads in 1usize..8,
    ) {
        let mut source = MemorySource::with_records(available);
        let mut buf = vec![SampleRecord::default(); buf_len];
        let mut remaining = available;

        for _ in 0..reads {
            let got = source.read_records(&mut buf).map_err(|e| {
                TestCaseError::fail(e.to_string())
            })?;
            prop_assert!(got <= buf_len);
            prop_assert!(got <= remaining);
            remaining -= got;
            prop_assert_eq!(source.available(), remaining);
        }
    }

    /// Readiness is exactly "open with records buffered".
    #[test]
    fn prop_readiness_tracks_availability(available in 0usize..256) {
        let mut source = MemorySource::with_records(available);
        prop_assert_eq!(source.poll_ready(), available > 0);

        source.close();
        prop_assert!(!source.poll_ready());
    }

    /// Wire decode round-trips the little-endian value bytes.
    #[test]
    fn prop_wire_decode(channel in any::<u8>(), value in any::<i32>()) {
        let le = value.to_le_bytes();
        let record = SampleRecord::from_wire([channel, le[0], le[1], le[2], le[3]]);
        prop_assert_eq!(record.channel, channel);
        prop_assert_eq!({ record.value }, value);
    }
}
