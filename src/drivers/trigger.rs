//! Debounced fire-button edge detector.
//!
//! The control loop samples the raw switch level every tick and feeds it
//! to [`Trigger::tick`] with the current monotonic time. A level only
//! counts once it has held for [`DEBOUNCE_MS`]; a press is reported once,
//! on the debounced released→pressed edge.

/// Minimum time a new switch level must hold before it is accepted.
pub const DEBOUNCE_MS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    /// Raw level agrees with the accepted level.
    Stable,
    /// Raw level differs from the accepted level since `since_ms`.
    Settling { since_ms: u32 },
}

/// Polled, debounced trigger input.
pub struct Trigger {
    pressed: bool,
    state: DebounceState,
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger {
    /// Starts in the released position.
    pub fn new() -> Self {
        Self {
            pressed: false,
            state: DebounceState::Stable,
        }
    }

    /// Call from the main loop at each control tick with the raw switch
    /// level (`true` = held). Returns `true` exactly once per debounced
    /// press.
    pub fn tick(&mut self, raw_pressed: bool, now_ms: u32) -> bool {
        if raw_pressed == self.pressed {
            self.state = DebounceState::Stable;
            return false;
        }

        match self.state {
            DebounceState::Stable => {
                self.state = DebounceState::Settling { since_ms: now_ms };
                false
            }
            DebounceState::Settling { since_ms } => {
                if now_ms.wrapping_sub(since_ms) < DEBOUNCE_MS {
                    return false;
                }
                self.pressed = raw_pressed;
                self.state = DebounceState::Stable;
                raw_pressed
            }
        }
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
