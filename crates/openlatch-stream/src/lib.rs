//! # openlatch-stream
//!
//! Streaming-source plumbing for the latch monitor: a record-oriented,
//! non-blocking sample source and the single readiness-polling primitive the
//! monitoring core suspends on.
//!
//! The acquisition hardware streams fixed-size sample records continuously.
//! Nobody consumes them; they exist so DMA/IRQ buffers never overflow, and the
//! monitor drains them in small bounded chunks between the things it actually
//! waits for. Two traits capture that:
//!
//! - [`SampleSource`] - an open, non-blocking, record-oriented input with a
//!   zero-timeout readiness check and a single bounded read
//! - [`WaitPoint`] - a multiplexed wait over {control channel, sample source}
//!   with a tick deadline, plus a pure-timeout pause
//!
//! On Linux both are backed by `poll(2)` ([`AdcStream`], [`PollWaitPoint`]).
//! [`MemorySource`] and [`ScriptedWaitPoint`] provide deterministic
//! hardware-free stand-ins.

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod record;
pub mod source;
pub mod wait;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub use linux::{AdcStream, PollWaitPoint};

pub mod prelude;

pub use error::{StreamError, StreamResult};
pub use memory::{MemorySource, ScriptedWaitPoint};
pub use record::{DRAIN_CHUNK_RECORDS, SampleRecord};
pub use source::SampleSource;
pub use wait::{WaitPoint, Wake};
