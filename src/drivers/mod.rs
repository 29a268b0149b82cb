//! Actuator driver and trigger input.

pub mod poofer;
pub mod trigger;
