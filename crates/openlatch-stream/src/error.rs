//! Error types for stream and readiness operations.

/// Errors that can occur while opening, draining, or waiting on streams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// Opening the sample device failed.
    #[error("Failed to open {path}: errno {errno}")]
    Open {
        /// Device path that was attempted.
        path: String,
        /// OS error number.
        errno: i32,
    },

    /// The conversion-trigger request was rejected.
    #[error("Acquisition trigger failed: errno {errno}")]
    TriggerFailed {
        /// OS error number.
        errno: i32,
    },

    /// A read on the source or control channel failed.
    #[error("Read failed: errno {errno}")]
    Read {
        /// OS error number.
        errno: i32,
    },

    /// The multiplexed wait itself failed.
    #[error("Readiness wait failed: errno {errno}")]
    WaitFailed {
        /// OS error number.
        errno: i32,
    },

    /// The source handle is closed or was never opened.
    #[error("Stream is closed")]
    Closed,
}

impl StreamError {
    /// Create an open error from the last OS error.
    #[must_use]
    pub fn open(path: impl Into<String>, errno: i32) -> Self {
        Self::Open {
            path: path.into(),
            errno,
        }
    }
}

/// A specialized `Result` type for stream operations.
pub type StreamResult<T> = std::result::Result<T, StreamError>;
