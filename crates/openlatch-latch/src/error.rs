//! Error types for latch controller operations.

/// Errors that can occur while driving the latch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatchError {
    /// The controller has not been initialized.
    #[error("Latch is not initialized")]
    NotInitialized,

    /// Re-arm was requested before the latch ever tripped.
    #[error("Latch has not tripped")]
    NotTripped,

    /// Requested phase change is not allowed from the current phase.
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition {
        /// Current phase.
        from: &'static str,
        /// Attempted target phase.
        to: &'static str,
    },

    /// Configuration values are out of range for the hardware.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The board glue reported a failure.
    #[error("Hardware fault: {0}")]
    HardwareFault(String),
}

impl LatchError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a hardware fault error.
    #[must_use]
    pub fn hardware_fault(msg: impl Into<String>) -> Self {
        Self::HardwareFault(msg.into())
    }

    /// Create an invalid transition error.
    #[must_use]
    pub fn invalid_transition(from: &'static str, to: &'static str) -> Self {
        Self::InvalidTransition { from, to }
    }
}

/// A specialized `Result` type for latch operations.
pub type LatchResult<T> = std::result::Result<T, LatchError>;
