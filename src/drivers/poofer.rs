//! Poofer driver (solenoid valve on a single digital output).
//!
//! `activate()` opens the valve and stamps the start time; the owning
//! control loop calls `poll()` every tick and the driver closes the valve
//! once `duration_ms` has elapsed. Overshoot past the duration is bounded
//! only by the caller's polling interval.
//!
//! ## Dual-target design
//!
//! The pin is any `embedded_hal` [`OutputPin`] and time comes from a
//! [`Clock`], so the same driver runs on an ESP-IDF `PinDriver` and on
//! host-side mocks.

use embedded_hal::digital::OutputPin;
use log::{debug, info};

use crate::error::{Error, Result};
use crate::ports::Clock;

/// Valve state as last commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PooferState {
    /// Line LOW, valve closed.
    Inactive,
    /// Line HIGH since `since_ms` on the driver's clock.
    Active { since_ms: u32 },
}

/// Timed driver for one solenoid output.
pub struct Poofer<P, C> {
    pin: P,
    clock: C,
    duration_ms: u32,
    state: PooferState,
}

impl<P, C> Poofer<P, C>
where
    P: OutputPin,
    C: Clock,
{
    /// Bind the driver to an output line and drive it LOW.
    ///
    /// The line is forced inactive whatever level it was left at.
    pub fn new(mut pin: P, duration_ms: u32, clock: C) -> Result<Self, P::Error> {
        pin.set_low().map_err(Error::Pin)?;
        info!("poofer: ready (duration={}ms)", duration_ms);
        Ok(Self {
            pin,
            clock,
            duration_ms,
            state: PooferState::Inactive,
        })
    }

    /// Open the valve and start a new timing window.
    ///
    /// Calling this while already active restarts the window.
    pub fn activate(&mut self) -> Result<(), P::Error> {
        self.pin.set_high().map_err(Error::Pin)?;
        let now = self.clock.now_ms();
        self.state = PooferState::Active { since_ms: now };
        debug!("poofer: on @{}ms", now);
        Ok(())
    }

    /// Close the valve. Unconditional; no timing side effects.
    pub fn deactivate(&mut self) -> Result<(), P::Error> {
        self.pin.set_low().map_err(Error::Pin)?;
        if self.is_active() {
            debug!("poofer: off");
        }
        self.state = PooferState::Inactive;
        Ok(())
    }

    /// Re-stamp the start of the current window without touching the line.
    ///
    /// No-op while inactive.
    pub fn restart_timer(&mut self) {
        if let PooferState::Active { since_ms } = &mut self.state {
            *since_ms = self.clock.now_ms();
        }
    }

    /// Call from the control loop on every tick.
    ///
    /// Returns `true` if this call closed the valve because the duration
    /// ran out.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        let Some(elapsed) = self.elapsed_ms() else {
            return Ok(false);
        };
        if elapsed < self.duration_ms {
            return Ok(false);
        }
        debug!("poofer: timed out after {}ms", elapsed);
        self.deactivate()?;
        Ok(true)
    }

    /// Milliseconds since the last activation, `None` while inactive.
    pub fn elapsed_ms(&self) -> Option<u32> {
        match self.state {
            PooferState::Active { since_ms } => Some(self.clock.now_ms().wrapping_sub(since_ms)),
            PooferState::Inactive => None,
        }
    }

    /// Milliseconds until `poll()` will close the valve, `None` while
    /// inactive. Zero means the next poll times out.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.elapsed_ms()
            .map(|elapsed| self.duration_ms.saturating_sub(elapsed))
    }

    /// Hand the pin and clock back to the caller. The line is left as is.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

impl<P, C> Poofer<P, C> {
    /// Current state; never read back from the pin.
    pub fn state(&self) -> PooferState {
        self.state
    }

    /// Valve open.
    pub fn is_active(&self) -> bool {
        matches!(self.state, PooferState::Active { .. })
    }

    /// Burst length fixed at construction.
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
