//! Poofer Firmware — Main Entry Point
//!
//! ```text
//!  trigger GPIO ──▶ Trigger (debounce) ──▶ Poofer::activate()
//!                                        │
//!  MonotonicClock ──▶ Poofer::poll() ◀───┘ every poll_interval_ms
//!                          │
//!                          ▼
//!                   solenoid GPIO (PinDriver)
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use log::{info, warn};

use poofer::adapters::time::MonotonicClock;
use poofer::drivers::trigger::Trigger;
use poofer::{Clock, Poofer, PooferConfig};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Poofer v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config (compile-time defaults, validated) ──────────
    let config = PooferConfig::default();
    config.validate()?;
    info!(
        "config: gpio={} trigger={} duration={}ms poll={}ms",
        config.gpio, config.trigger_gpio, config.duration_ms, config.poll_interval_ms
    );

    // ── 3. Pins ───────────────────────────────────────────────
    // SAFETY: both GPIO numbers were validated above, are distinct, and
    // are not claimed anywhere else in the firmware.
    let out = PinDriver::output(unsafe { AnyOutputPin::new(config.gpio) })?;
    let mut trigger = PinDriver::input(unsafe { AnyIOPin::new(config.trigger_gpio) })?;
    trigger.set_pull(Pull::Up)?;

    // Both clocks read the same esp_timer counter.
    let clock = MonotonicClock::new();
    let mut poofer = Poofer::new(out, config.duration_ms, MonotonicClock::new())?;
    let mut fire_button = Trigger::new();

    // ── 4. Control loop ───────────────────────────────────────
    loop {
        if fire_button.tick(trigger.is_low(), clock.now_ms()) {
            if let Err(e) = poofer.activate() {
                warn!("activate failed: {}", e);
            }
        }

        // A failed timeout write leaves the driver active, so the next
        // poll retries closing the valve.
        match poofer.poll() {
            Ok(true) => info!("burst complete"),
            Ok(false) => {}
            Err(e) => warn!("poll failed: {}", e),
        }

        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
