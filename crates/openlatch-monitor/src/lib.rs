//! # openlatch-monitor
//!
//! The non-blocking polling and arming core of the latch monitor.
//!
//! A single thread multiplexes three obligations through one readiness
//! primitive:
//!
//! - keep the streaming ADC drained so DMA/IRQ activity never stalls
//! - wait for operator confirmations on the control channel
//! - sequence the latch through its lifecycle and watch for trips
//!
//! The pieces compose bottom-up: [`drain_nonblocking`] is the leaf,
//! [`wait_for_confirmation`] and [`wait_for_trip`] interleave it with their
//! waits, and [`LifecycleDriver`] sequences the whole
//! initialize/arm/trip/re-arm cycle. A [`CancelToken`] threads through every
//! waiting loop so the otherwise run-forever flow stays testable.
//!
//! ## Example
//!
//! ```rust
//! use openlatch_latch::prelude::*;
//! use openlatch_monitor::prelude::*;
//! use openlatch_stream::prelude::*;
//!
//! let latch = SoftwareLatch::new();
//! let source = MemorySource::new();
//! let wait = ScriptedWaitPoint::new([Wake::control()]);
//!
//! let mut driver = LifecycleDriver::new(
//!     latch,
//!     source,
//!     wait,
//!     LatchConfig::default(),
//!     MonitorConfig::default(),
//! );
//! driver.cancel_token().cancel();
//! driver.run().expect("cancelled run exits cleanly");
//! ```

#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod config;
pub mod confirm;
pub mod drain;
pub mod driver;
pub mod error;
pub mod prelude;
pub mod trip;

pub use cancel::CancelToken;
pub use config::{MonitorConfig, MonitorConfigBuilder};
pub use confirm::{Confirmation, wait_for_confirmation};
pub use drain::drain_nonblocking;
pub use driver::LifecycleDriver;
pub use error::{MonitorError, MonitorResult};
pub use trip::{TripWait, wait_for_trip};
