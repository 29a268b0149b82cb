//! Construction-time configuration.
//!
//! Supplied once at boot; there is no runtime reconfiguration and nothing
//! is persisted.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Poofer controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PooferConfig {
    /// Solenoid output GPIO
    pub gpio: i32,
    /// Fire button GPIO (active low)
    pub trigger_gpio: i32,
    /// Burst length in milliseconds. Zero means "off on the next poll".
    pub duration_ms: u32,
    /// Control loop period in milliseconds
    pub poll_interval_ms: u32,
}

impl Default for PooferConfig {
    fn default() -> Self {
        Self {
            gpio: pins::POOFER_GPIO,
            trigger_gpio: pins::TRIGGER_GPIO,
            duration_ms: pins::DEFAULT_DURATION_MS,
            poll_interval_ms: pins::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PooferConfig {
    /// Config with the default pins and the given burst length.
    pub fn with_duration(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Reject values that cannot be wired up. Does not clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gpio < 0 {
            return Err(ConfigError::InvalidGpio(self.gpio));
        }
        if self.trigger_gpio < 0 {
            return Err(ConfigError::InvalidGpio(self.trigger_gpio));
        }
        if self.gpio == self.trigger_gpio {
            return Err(ConfigError::PinConflict(self.gpio));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
