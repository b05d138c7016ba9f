//! Error types for the monitoring core.

use openlatch_latch::error::LatchError;
use openlatch_stream::error::StreamError;

/// Errors that escape the monitoring flow.
///
/// Only the fatal conditions surface here; recoverable ones (re-arm
/// failures, drain failures, a source that never opened) are absorbed inside
/// the loops per the error policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    /// Latch initialization failed. Fatal.
    #[error("Latch initialization failed: {0}")]
    InitializeFailed(#[source] LatchError),

    /// Arming the latch failed. Fatal.
    #[error("Latch arm failed: {0}")]
    ArmFailed(#[source] LatchError),

    /// The readiness primitive itself failed.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Monitor configuration is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl MonitorError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// A specialized `Result` type for monitor operations.
pub type MonitorResult<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonitorError::InitializeFailed(LatchError::hardware_fault("no board"));
        assert_eq!(
            err.to_string(),
            "Latch initialization failed: Hardware fault: no board"
        );

        let err = MonitorError::from(StreamError::Closed);
        assert_eq!(err.to_string(), "Stream is closed");
    }
}
