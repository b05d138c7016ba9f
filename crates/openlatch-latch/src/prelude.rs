//! Prelude for openlatch-latch.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use openlatch_latch::prelude::*;
//!
//! let mut latch = SoftwareLatch::new();
//! latch.initialize(&LatchConfig::default()).expect("Failed to initialize");
//! latch.arm().expect("Failed to arm");
//! ```

pub use crate::config::{LatchConfig, LatchConfigBuilder};
pub use crate::controller::LatchController;
pub use crate::error::{LatchError, LatchResult};
pub use crate::software_impl::{FaultOp, SoftwareLatch};
pub use crate::state::{LatchMetrics, LatchPhase, LatchState};
