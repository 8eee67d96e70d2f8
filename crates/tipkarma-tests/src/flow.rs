//! Integration tests for the compute → gate → spin → playback flow.
//!
//! Exercises cross-crate interactions between tipkarma-core and
//! tipkarma-ui the way the TIP button does.

use tipkarma_core::{compute, plan, AccuracyGate, KarmaWheel, SpinDirection, WheelColor};
use tipkarma_ui::{format_currency, parse_bill, SpinPlayback};

// ── Helpers ────────────────────────────────────────────────────

/// One TIP-button press: parse, compute, commit, spin.
fn press_tip(
    gate: &mut AccuracyGate,
    wheel: &mut KarmaWheel,
    bill_text: &str,
    tip_percentage: i32,
) -> SpinPlayback {
    let result = compute(parse_bill(bill_text), tip_percentage);
    gate.commit(result);

    let start = wheel.rotation_degrees();
    let from_color = wheel.color();
    let plan = wheel.spin(tip_percentage);
    SpinPlayback::new(plan, start, from_color)
}

// ── The happy path ─────────────────────────────────────────────

#[test]
fn tip_press_reveals_amounts_and_spins_forward() {
    let mut gate = AccuracyGate::default();
    let mut wheel = KarmaWheel::default();

    let mut playback = press_tip(&mut gate, &mut wheel, "100", 15);

    // Amounts now match the live inputs and may be shown.
    let current = compute(parse_bill("100"), 15);
    assert!(!gate.should_hide(&current, true));
    assert_eq!(format_currency(gate.last().tip_amount), "$15.00");
    assert_eq!(format_currency(gate.last().total_amount), "$115.00");

    // The wheel plays a full clockwise revolution back to its start.
    let mut elapsed = 0.0;
    let mut frame = playback.tick(0.0);
    while !frame.finished {
        frame = playback.tick(1.0 / 60.0);
        elapsed += 1.0 / 60.0;
        assert!(elapsed < 60.0, "spin never finished");
    }
    assert!((frame.angle_degrees - wheel.rotation_degrees()).abs() < 1e-6);
    assert!(elapsed >= 7.0 - 0.1);
}

#[test]
fn editing_after_press_hides_amounts_until_next_press() {
    let mut gate = AccuracyGate::default();
    let mut wheel = KarmaWheel::default();

    press_tip(&mut gate, &mut wheel, "100", 15);

    // The user types one more digit: "100" → "1000".
    let current = compute(parse_bill("1000"), 15);
    assert!(gate.should_hide(&current, true));

    press_tip(&mut gate, &mut wheel, "1000", 15);
    assert!(!gate.should_hide(&current, true));
    assert_eq!(format_currency(gate.last().total_amount), "$1,150.00");
}

// ── Karma polarity across presses ──────────────────────────────

#[test]
fn polarity_change_fades_color_once() {
    let mut gate = AccuracyGate::default();
    let mut wheel = KarmaWheel::default();

    // Good tip on a fresh (green) wheel: no fade.
    let mut playback = press_tip(&mut gate, &mut wheel, "50", 20);
    let frame = playback.tick(0.5);
    assert!((frame.green_alpha - 1.0).abs() < 1e-6);

    // Dropping to a bad tip fades to red over two seconds while the
    // wheel spins counterclockwise.
    let mut playback = press_tip(&mut gate, &mut wheel, "50", 5);
    let frame = playback.tick(2.0);
    assert!((frame.red_alpha - 1.0).abs() < 1e-6);
    assert_eq!(wheel.color(), WheelColor::Red);

    // A second bad tip keeps red with no fade.
    let plan = plan(5, wheel.rotation_degrees(), false);
    assert_eq!(plan.direction, SpinDirection::CounterClockwise);
    let mut playback = press_tip(&mut gate, &mut wheel, "50", 5);
    let frame = playback.tick(0.0);
    assert!((frame.red_alpha - 1.0).abs() < 1e-6);
}

#[test]
fn consecutive_spins_compose_orientation() {
    let mut gate = AccuracyGate::default();
    let mut wheel = KarmaWheel::default();

    // Distance between wrapped angles, tolerant of the 0/360 seam.
    fn wrapped_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    // 20% is 1⅔ revolutions: the wheel parks at 240°.
    press_tip(&mut gate, &mut wheel, "10", 20);
    assert!(wrapped_diff(wheel.rotation_degrees(), 240.0) < 1e-6);

    // 10% backs off 1⅔ revolutions: back to zero.
    press_tip(&mut gate, &mut wheel, "10", 10);
    assert!(wrapped_diff(wheel.rotation_degrees(), 0.0) < 1e-6);
}

// ── Unparseable input degrades to zero ─────────────────────────

#[test]
fn garbage_bill_text_computes_zero() {
    let mut gate = AccuracyGate::default();
    let mut wheel = KarmaWheel::default();

    press_tip(&mut gate, &mut wheel, "lunch money", 15);
    assert!(gate.last().is_zero());

    // All-zero amounts stay hidden even though they match the inputs.
    let current = compute(0.0, 15);
    assert!(gate.should_hide(&current, true));
}
