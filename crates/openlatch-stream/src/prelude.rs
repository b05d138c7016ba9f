//! Prelude for openlatch-stream.
//!
//! Re-exports the most commonly used types for convenient importing.

pub use crate::error::{StreamError, StreamResult};
pub use crate::memory::{MemorySource, ScriptedWaitPoint};
pub use crate::record::{DRAIN_CHUNK_RECORDS, SampleRecord};
pub use crate::source::SampleSource;
pub use crate::wait::{WaitPoint, Wake};

#[cfg(target_os = "linux")]
pub use crate::linux::{AdcStream, PollWaitPoint};
