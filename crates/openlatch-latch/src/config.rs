//! Configuration types for the latch controller.
//!
//! All values are plain scalars chosen before `initialize` and passed through
//! to the board glue unchanged.

use crate::error::{LatchError, LatchResult};

/// Latch controller configuration.
///
/// Mirrors what the board glue needs to program the timer/comparator pair:
/// which advanced timer drives the output, which compare channel, which
/// analog watchdog feeds the trigger input, and the trigger filter/polarity
/// plus the counter reload and compare values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatchConfig {
    /// Advanced timer instance (1 or 8).
    pub timer: u8,

    /// Output compare channel (1..=4).
    pub channel: u8,

    /// Analog watchdog selector (1..=3).
    pub watchdog: u8,

    /// External trigger filter (0..=15).
    pub trigger_filter: u8,

    /// External trigger polarity (true = inverted).
    pub trigger_polarity: bool,

    /// Counter auto-reload value. Must be non-zero.
    pub auto_reload: u32,

    /// Compare value. Must be non-zero and not exceed `auto_reload`.
    pub compare: u32,
}

impl LatchConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> LatchConfigBuilder {
        LatchConfigBuilder::default()
    }

    /// Validate the configuration against the hardware's ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> LatchResult<()> {
        if !matches!(self.timer, 1 | 8) {
            return Err(LatchError::invalid_configuration("timer must be 1 or 8"));
        }
        if !(1..=4).contains(&self.channel) {
            return Err(LatchError::invalid_configuration(
                "channel must be between 1 and 4",
            ));
        }
        if !(1..=3).contains(&self.watchdog) {
            return Err(LatchError::invalid_configuration(
                "watchdog selector must be between 1 and 3",
            ));
        }
        if self.trigger_filter > 15 {
            return Err(LatchError::invalid_configuration(
                "trigger filter must not exceed 15",
            ));
        }
        if self.auto_reload == 0 {
            return Err(LatchError::invalid_configuration(
                "auto-reload must be non-zero",
            ));
        }
        if self.compare == 0 || self.compare > self.auto_reload {
            return Err(LatchError::invalid_configuration(
                "compare must be non-zero and not exceed auto-reload",
            ));
        }
        Ok(())
    }
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self {
            timer: 1,
            channel: 1,
            watchdog: 1,
            trigger_filter: 0,
            trigger_polarity: false,
            auto_reload: 0xFFFF,
            compare: 1,
        }
    }
}

/// Builder for `LatchConfig`.
#[derive(Debug, Default)]
pub struct LatchConfigBuilder {
    config: LatchConfig,
}

impl LatchConfigBuilder {
    /// Set the timer instance.
    #[must_use]
    pub fn timer(mut self, timer: u8) -> Self {
        self.config.timer = timer;
        self
    }

    /// Set the output compare channel.
    #[must_use]
    pub fn channel(mut self, channel: u8) -> Self {
        self.config.channel = channel;
        self
    }

    /// Set the analog watchdog selector.
    #[must_use]
    pub fn watchdog(mut self, watchdog: u8) -> Self {
        self.config.watchdog = watchdog;
        self
    }

    /// Set the external trigger filter.
    #[must_use]
    pub fn trigger_filter(mut self, filter: u8) -> Self {
        self.config.trigger_filter = filter;
        self
    }

    /// Set the external trigger polarity.
    #[must_use]
    pub fn trigger_polarity(mut self, inverted: bool) -> Self {
        self.config.trigger_polarity = inverted;
        self
    }

    /// Set the counter auto-reload value.
    #[must_use]
    pub fn auto_reload(mut self, arr: u32) -> Self {
        self.config.auto_reload = arr;
        self
    }

    /// Set the compare value.
    #[must_use]
    pub fn compare(mut self, ccr: u32) -> Self {
        self.config.compare = ccr;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> LatchResult<LatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auto_reload, 0xFFFF);
        assert_eq!(config.compare, 1);
    }

    #[test]
    fn test_timer_validation() {
        let config = LatchConfig {
            timer: 3,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LatchConfig {
            timer: 8,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_channel_validation() {
        let config = LatchConfig {
            channel: 0,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LatchConfig {
            channel: 5,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_compare_must_not_exceed_reload() {
        let config = LatchConfig {
            auto_reload: 100,
            compare: 101,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LatchConfig {
            auto_reload: 100,
            compare: 100,
            ..LatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let result = LatchConfig::builder()
            .timer(8)
            .channel(2)
            .watchdog(3)
            .trigger_filter(4)
            .trigger_polarity(true)
            .auto_reload(0x8000)
            .compare(0x10)
            .build();
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.timer, 8);
            assert_eq!(config.channel, 2);
            assert_eq!(config.watchdog, 3);
            assert!(config.trigger_polarity);
        }
    }

    #[test]
    fn test_builder_rejects_zero_compare() {
        let result = LatchConfig::builder().compare(0).build();
        assert!(result.is_err());
    }
}
