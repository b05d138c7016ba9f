//! Sample source trait.

use crate::error::{StreamError, StreamResult};
use crate::record::SampleRecord;

/// An open, non-blocking, record-oriented sample input.
///
/// Implementations never block: readiness is a zero-timeout check and a read
/// returns whatever is already buffered, `Ok(0)` included.
pub trait SampleSource {
    /// Whether the handle is valid and open.
    fn is_open(&self) -> bool;

    /// Zero-timeout readiness check. A closed handle answers `false`.
    fn poll_ready(&self) -> bool;

    /// Perform exactly one bounded read into `buf`.
    ///
    /// Returns the number of whole records read, which may be zero when the
    /// source has nothing buffered. Never blocks and never reads more than
    /// one chunk, even if more data remains ready.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is closed or the read fails outright.
    fn read_records(&mut self, buf: &mut [SampleRecord]) -> StreamResult<usize>;
}

/// A missing source behaves as a permanently closed handle.
///
/// Lets callers thread `Option<AdcStream>` through code that drains
/// unconditionally; every operation on `None` is a no-op.
impl<S: SampleSource> SampleSource for Option<S> {
    fn is_open(&self) -> bool {
        self.as_ref().is_some_and(SampleSource::is_open)
    }

    fn poll_ready(&self) -> bool {
        self.as_ref().is_some_and(SampleSource::poll_ready)
    }

    fn read_records(&mut self, buf: &mut [SampleRecord]) -> StreamResult<usize> {
        match self.as_mut() {
            Some(source) => source.read_records(buf),
            None => Err(StreamError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;

    #[test]
    fn test_none_is_closed() {
        let mut source: Option<MemorySource> = None;
        assert!(!source.is_open());
        assert!(!source.poll_ready());

        let mut buf = [SampleRecord::default(); 4];
        assert_eq!(source.read_records(&mut buf), Err(StreamError::Closed));
    }

    #[test]
    fn test_some_delegates() {
        let mut source = Some(MemorySource::with_records(2));
        assert!(source.is_open());
        assert!(source.poll_ready());

        let mut buf = [SampleRecord::default(); 4];
        assert_eq!(source.read_records(&mut buf), Ok(2));
        assert!(!source.poll_ready());
    }
}
