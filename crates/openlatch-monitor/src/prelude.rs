//! Prelude for openlatch-monitor.
//!
//! Re-exports the most commonly used types for convenient importing.

pub use crate::cancel::CancelToken;
pub use crate::config::{MonitorConfig, MonitorConfigBuilder};
pub use crate::confirm::{Confirmation, wait_for_confirmation};
pub use crate::drain::drain_nonblocking;
pub use crate::driver::LifecycleDriver;
pub use crate::error::{MonitorError, MonitorResult};
pub use crate::trip::{TripWait, wait_for_trip};
