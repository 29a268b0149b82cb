//! GPIO assignments for the poofer controller board.
//!
//! Single source of truth — the config defaults and the firmware entry
//! point reference this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Solenoid valve (logic-level MOSFET, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: HIGH opens the propane solenoid valve.
pub const POOFER_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Trigger (active-low momentary switch, internal pull-up)
// ---------------------------------------------------------------------------

/// Digital input: LOW while the fire button is held.
pub const TRIGGER_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Default burst length.
pub const DEFAULT_DURATION_MS: u32 = 500;
/// Default control-loop period. Bounds how far a burst can overshoot.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;
