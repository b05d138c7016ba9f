//! # openlatch-latch
//!
//! Controller surface for an analog-watchdog-triggered hardware latch.
//!
//! The latch is a board resource: once armed, its output is driven to the
//! untripped level and held there until the analog watchdog fires, at which
//! point the output latches and stays latched until an explicit re-arm. This
//! crate provides:
//!
//! - [`LatchController`] trait consumed by the monitoring core
//! - [`SoftwareLatch`] for testing and hardware-free environments
//! - A phase state machine with atomic, deterministic transitions
//!
//! ## Phase Machine
//!
//! ```text
//! ┌────────┐ initialize() ┌──────┐  arm()   ┌───────┐
//! │ Uninit │─────────────►│ Idle │─────────►│ Armed │
//! └────────┘              └──────┘          └───────┘
//!                             ▲                 │
//!                             │ disarm()   trip()
//!                             │                 ▼
//!                             │             ┌─────────┐
//!                             └─────────────│ Tripped │
//!                                  rearm()──┴────►Armed
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openlatch_latch::prelude::*;
//!
//! let config = LatchConfig::default();
//! let mut latch = SoftwareLatch::new();
//!
//! latch.initialize(&config).expect("Failed to initialize");
//! latch.arm().expect("Failed to arm");
//! assert!(!latch.is_tripped());
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

pub mod config;
pub mod controller;
pub mod error;
pub mod prelude;
pub mod software_impl;
pub mod state;

pub use config::{LatchConfig, LatchConfigBuilder};
pub use controller::LatchController;
pub use error::{LatchError, LatchResult};
pub use software_impl::SoftwareLatch;
pub use state::{LatchMetrics, LatchPhase, LatchState};
