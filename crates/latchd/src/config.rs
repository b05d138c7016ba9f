//! Build-time configuration.
//!
//! Everything the monitor needs is fixed at compile time: the device path,
//! the timer/comparator wiring, and the counter values. There are no runtime
//! flags.

use openlatch_latch::config::LatchConfig;

/// Streaming ADC device path.
pub const ADC_DEVICE_PATH: &str = "/dev/adc0";

/// Advanced timer instance driving the latch output (1 or 8).
pub const TIMER: u8 = 1;

/// Output compare channel (1..=4).
pub const CHANNEL: u8 = 1;

/// Analog watchdog selector (1..=3).
pub const WATCHDOG: u8 = 1;

/// External trigger filter (0..=15).
pub const TRIGGER_FILTER: u8 = 0;

/// External trigger polarity (true = inverted).
pub const TRIGGER_POLARITY: bool = false;

/// Counter auto-reload value.
pub const AUTO_RELOAD: u32 = 0xFFFF;

/// Compare value; must stay non-zero for the output mode to hold HIGH.
pub const COMPARE: u32 = 1;

/// Assemble the latch configuration from the build-time constants.
#[must_use]
pub fn latch_config() -> LatchConfig {
    LatchConfig {
        timer: TIMER,
        channel: CHANNEL,
        watchdog: WATCHDOG,
        trigger_filter: TRIGGER_FILTER,
        trigger_polarity: TRIGGER_POLARITY,
        auto_reload: AUTO_RELOAD,
        compare: COMPARE,
    }
}
