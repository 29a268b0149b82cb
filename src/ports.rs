//! Port traits — the boundary between the driver and the platform.
//!
//! ```text
//!   MonotonicClock ──▶ Clock ──▶ Poofer ──▶ OutputPin ──▶ PinDriver / mock
//! ```
//!
//! The output sink is `embedded_hal::digital::OutputPin`; only the time
//! source needs a trait of our own.

// ───────────────────────────────────────────────────────────────
// Time source (driven adapter: platform → driver)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter since boot.
///
/// The counter is allowed to wrap at `u32::MAX`; callers measure
/// intervals with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Any `Fn() -> u32` is a clock. Handy for tests and simulations that
/// drive time by hand.
impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}
