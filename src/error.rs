//! Error types for the poofer driver.
//!
//! The driver itself models no failures: the only thing that can go wrong
//! is the HAL refusing a pin write, which is carried through unchanged in
//! [`Error::Pin`]. Configuration problems are caught before any pin is
//! opened.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
///
/// `E` is the HAL pin error (`core::convert::Infallible` for most
/// register-backed GPIOs, `EspError` on ESP-IDF).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The output line could not be driven.
    Pin(E),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "pin write failed: {e:?}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for Error<E> {}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A GPIO number is negative.
    InvalidGpio(i32),
    /// Trigger and output are wired to the same GPIO.
    PinConflict(i32),
    /// The control loop would spin without sleeping.
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGpio(pin) => write!(f, "invalid GPIO {pin}"),
            Self::PinConflict(pin) => write!(f, "GPIO {pin} used for both trigger and output"),
            Self::ZeroPollInterval => write!(f, "poll interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias, generic over the HAL pin error.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
