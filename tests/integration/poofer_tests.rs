//! End-to-end driver behaviour against the recording mock pin.

use poofer::{Clock, Error, Poofer, PooferConfig, PooferState};

use crate::mock_hw::{BrokenPin, FlakyPin, Level, MockClock, MockPin, WriteFault};

fn setup(duration_ms: u32) -> (Poofer<MockPin, MockClock>, MockPin, MockClock) {
    let pin = MockPin::new();
    let clock = MockClock::at(0);
    let poofer = Poofer::new(pin.clone(), duration_ms, clock.clone()).unwrap();
    (poofer, pin, clock)
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn construction_drives_line_low_even_if_left_high() {
    let pin = MockPin::left_high();
    assert!(pin.is_high());

    let poofer = Poofer::new(pin.clone(), 500, MockClock::at(0)).unwrap();

    assert_eq!(pin.level(), Level::Low);
    assert_eq!(poofer.state(), PooferState::Inactive);
    assert!(!poofer.is_active());
}

#[test]
fn built_from_config() {
    let config = PooferConfig::with_duration(300);
    config.validate().unwrap();
    let (poofer, _, _) = setup(config.duration_ms);
    assert_eq!(poofer.duration_ms(), 300);
}

// ── Burst timing ──────────────────────────────────────────────

#[test]
fn burst_of_500ms_scenario() {
    let (mut poofer, pin, clock) = setup(500);

    poofer.activate().unwrap();
    assert!(pin.is_high());

    clock.set(400);
    assert_eq!(poofer.poll(), Ok(false));
    assert!(pin.is_high());
    assert!(poofer.is_active());

    clock.set(600);
    assert_eq!(poofer.poll(), Ok(true));
    assert_eq!(pin.level(), Level::Low);
    assert_eq!(poofer.state(), PooferState::Inactive);
}

#[test]
fn zero_duration_turns_off_on_first_poll() {
    let (mut poofer, pin, _clock) = setup(0);

    poofer.activate().unwrap();
    assert!(pin.is_high());

    assert_eq!(poofer.poll(), Ok(true));
    assert!(!pin.is_high());
}

#[test]
fn repeated_polls_after_timeout_stay_off() {
    let (mut poofer, pin, clock) = setup(100);

    poofer.activate().unwrap();
    clock.set(100);
    assert_eq!(poofer.poll(), Ok(true));

    for t in [101, 500, 10_000, u32::MAX] {
        clock.set(t);
        assert_eq!(poofer.poll(), Ok(false));
        assert_eq!(pin.level(), Level::Low);
    }
}

#[test]
fn reactivation_restarts_window() {
    let (mut poofer, pin, clock) = setup(500);

    poofer.activate().unwrap();
    clock.set(300);
    poofer.activate().unwrap();

    // 500ms after the first activation, but only 200ms after the second.
    clock.set(500);
    assert_eq!(poofer.poll(), Ok(false));
    assert!(pin.is_high());
    assert_eq!(poofer.remaining_ms(), Some(300));

    clock.set(800);
    assert_eq!(poofer.poll(), Ok(true));
    assert!(!pin.is_high());
}

#[test]
fn overshoot_is_bounded_by_poll_interval() {
    let (mut poofer, pin, clock) = setup(95);

    poofer.activate().unwrap();
    let mut off_at = None;
    for _ in 0..20 {
        clock.advance(10);
        if poofer.poll().unwrap() {
            off_at = Some(clock.now_ms());
            break;
        }
    }

    assert_eq!(off_at, Some(100));
    assert!(!pin.is_high());
}

// ── Manual control ────────────────────────────────────────────

#[test]
fn deactivate_cuts_burst_short() {
    let (mut poofer, pin, clock) = setup(500);

    poofer.activate().unwrap();
    clock.set(50);
    poofer.deactivate().unwrap();
    assert!(!pin.is_high());

    clock.set(1_000);
    assert_eq!(poofer.poll(), Ok(false));
}

#[test]
fn deactivate_while_inactive_keeps_line_low() {
    let (mut poofer, pin, _clock) = setup(500);

    poofer.deactivate().unwrap();
    poofer.deactivate().unwrap();

    assert_eq!(pin.level(), Level::Low);
    assert_eq!(poofer.state(), PooferState::Inactive);
    assert!(pin.writes.borrow().iter().all(|l| *l == Level::Low));
}

#[test]
fn release_returns_resources() {
    let (mut poofer, pin, clock) = setup(500);
    poofer.activate().unwrap();

    let (released, _clock) = poofer.release();
    assert!(released.is_high());
    assert_eq!(released.write_count(), pin.write_count());
    drop(clock);
}

// ── HAL errors ────────────────────────────────────────────────

#[test]
fn pin_errors_propagate() {
    let result = Poofer::new(BrokenPin, 500, MockClock::at(0));
    assert!(matches!(result, Err(Error::Pin(WriteFault))));
}

fn setup_flaky(duration_ms: u32) -> (Poofer<FlakyPin, MockClock>, FlakyPin, MockClock) {
    let pin = FlakyPin::new();
    let clock = MockClock::at(0);
    let poofer = Poofer::new(pin.clone(), duration_ms, clock.clone()).unwrap();
    (poofer, pin, clock)
}

#[test]
fn failed_activate_stays_inactive() {
    let (mut poofer, pin, clock) = setup_flaky(500);

    pin.set_failing(true);
    assert_eq!(poofer.activate(), Err(Error::Pin(WriteFault)));
    assert_eq!(poofer.state(), PooferState::Inactive);
    assert!(!pin.inner.is_high());

    // Nothing to time out.
    clock.set(1_000);
    assert_eq!(poofer.poll(), Ok(false));
}

#[test]
fn failed_timeout_write_keeps_active_and_next_poll_retries() {
    let (mut poofer, pin, clock) = setup_flaky(100);
    poofer.activate().unwrap();

    pin.set_failing(true);
    clock.set(200);
    assert_eq!(poofer.poll(), Err(Error::Pin(WriteFault)));
    assert_eq!(poofer.state(), PooferState::Active { since_ms: 0 });
    assert!(pin.inner.is_high());

    pin.set_failing(false);
    clock.set(210);
    assert_eq!(poofer.poll(), Ok(true));
    assert_eq!(poofer.state(), PooferState::Inactive);
    assert_eq!(pin.inner.level(), Level::Low);
}

#[test]
fn failed_deactivate_keeps_window() {
    let (mut poofer, pin, clock) = setup_flaky(500);
    poofer.activate().unwrap();

    clock.set(50);
    pin.set_failing(true);
    assert_eq!(poofer.deactivate(), Err(Error::Pin(WriteFault)));
    assert!(poofer.is_active());
    assert_eq!(poofer.remaining_ms(), Some(450));
}
