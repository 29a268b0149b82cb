//! Poofer firmware library.
//!
//! A timed driver for one solenoid-valve output: `activate()` opens it,
//! `poll()` from the control loop closes it once the burst duration has
//! run out. Hardware is reached only through `embedded_hal` pins and the
//! [`ports::Clock`] trait, so everything here runs on the host for
//! testing. ESP-IDF specifics are guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod ports;

pub use config::PooferConfig;
pub use drivers::poofer::{Poofer, PooferState};
pub use error::{ConfigError, Error};
pub use ports::Clock;
