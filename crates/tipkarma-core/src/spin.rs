//! Karma-wheel spin planning.
//!
//! Tipping well spins the wheel clockwise ("good karma", green); tipping
//! poorly spins it counterclockwise ("bad karma", red). The further the
//! percentage sits from the 15% threshold, the more revolutions the plan
//! contains. A plan is a finite sequence of timed segments of at most 90
//! degrees each (interpolated rotations of a half turn or more are
//! ambiguous in direction), with per-segment durations stretched by an
//! additive multiplier so the wheel decelerates like a roulette wheel.

use serde::{Deserialize, Serialize};

/// Nominal duration of a full spin, before the slowdown multiplier.
pub const NOMINAL_SPIN_SECONDS: f64 = 4.0;

/// Tip percentages at or above this spin with good karma.
pub const GOOD_KARMA_MIN_PERCENT: i32 = 15;

/// Revolution cap for the good-karma branch (reached at 30%).
pub const MAX_SPINS: f64 = 3.0;

/// Percentage points per additional revolution.
pub const SPINS_PER_PERCENT_STEP: f64 = 7.5;

/// Largest angular sweep a single segment may cover.
pub const MAX_SEGMENT_DEGREES: f64 = 90.0;

/// How much the slowdown multiplier grows after each segment.
const SLOWDOWN_STEP: f64 = 0.5;

// ── Direction & polarity ────────────────────────────────────────

/// Which way the wheel turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinDirection {
    /// Good karma: with the arrows.
    Clockwise,
    /// Bad karma: against the arrows.
    CounterClockwise,
}

impl SpinDirection {
    /// Direction for a tip percentage.
    pub fn for_tip(tip_percentage: i32) -> Self {
        if tip_percentage >= GOOD_KARMA_MIN_PERCENT {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// +1 for clockwise, −1 for counterclockwise.
    pub fn signum(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }

    /// The wheel color this direction should display.
    pub fn expected_color(self) -> WheelColor {
        match self {
            Self::Clockwise => WheelColor::Green,
            Self::CounterClockwise => WheelColor::Red,
        }
    }
}

/// The polarity color the wheel currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelColor {
    Green,
    Red,
}

impl WheelColor {
    pub fn opposite(self) -> Self {
        match self {
            Self::Green => Self::Red,
            Self::Red => Self::Green,
        }
    }
}

// ── Plan ────────────────────────────────────────────────────────

/// One timed slice of a spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinSegment {
    /// Realized duration, slowdown multiplier included.
    pub seconds: f64,
    /// Angular sweep of this segment, in (0, 90].
    pub degrees: f64,
    /// Absolute wheel orientation after this segment, wrapped to [0, 360).
    pub cumulative_degrees: f64,
}

/// A complete spin: direction, optional color swap, and ordered segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub direction: SpinDirection,
    /// Cross-fade the wheel to the other polarity color at the start of
    /// the plan, concurrently with the rotation.
    pub color_swap: bool,
    /// Duration of the cross-fade (half the nominal spin), 0 when no swap.
    pub color_swap_seconds: f64,
    /// Total angular travel: revolutions × 360.
    pub total_degrees: f64,
    pub segments: Vec<SpinSegment>,
}

impl SpinPlan {
    /// Realized duration of the whole plan.
    pub fn total_seconds(&self) -> f64 {
        self.segments.iter().map(|s| s.seconds).sum()
    }

    /// Wheel orientation after the final segment, wrapped to [0, 360).
    pub fn end_degrees(&self) -> f64 {
        self.segments
            .last()
            .map(|s| s.cumulative_degrees)
            .unwrap_or(0.0)
    }
}

/// Number of revolutions for a tip percentage.
///
/// Good karma is capped at three revolutions. Bad karma has no cap of
/// its own; the stepper's 0..=100 range is the only floor, so a directly
/// supplied negative percentage keeps accelerating.
fn num_spins(tip_percentage: i32) -> f64 {
    let pct = f64::from(tip_percentage);
    let threshold = f64::from(GOOD_KARMA_MIN_PERCENT);
    if tip_percentage >= GOOD_KARMA_MIN_PERCENT {
        (1.0 + (pct - threshold) / SPINS_PER_PERCENT_STEP).min(MAX_SPINS)
    } else {
        1.0 + (threshold - pct) / SPINS_PER_PERCENT_STEP
    }
}

/// Build the spin plan for a tip percentage.
///
/// `start_degrees` is the wheel's current orientation, carried across
/// spins so consecutive plans compose instead of resetting to zero.
/// `showing_opposite_color` is supplied by the caller: true when the
/// wheel currently displays the other polarity's color, which schedules
/// a one-time cross-fade at the head of the plan.
pub fn plan(tip_percentage: i32, start_degrees: f64, showing_opposite_color: bool) -> SpinPlan {
    let direction = SpinDirection::for_tip(tip_percentage);
    let total_degrees = num_spins(tip_percentage) * 360.0;

    let mut segments = Vec::new();
    let mut remaining = total_degrees;
    let mut cumulative = start_degrees.rem_euclid(360.0);
    let mut slowdown = 1.0;
    while remaining > 0.0 {
        let degrees = remaining.min(MAX_SEGMENT_DEGREES);
        cumulative = (cumulative + direction.signum() * degrees).rem_euclid(360.0);
        // rem_euclid of a tiny negative value can round up to exactly
        // 360.0, which would leak out of the [0, 360) invariant.
        if cumulative >= 360.0 {
            cumulative = 0.0;
        }
        segments.push(SpinSegment {
            seconds: NOMINAL_SPIN_SECONDS * degrees / total_degrees * slowdown,
            degrees,
            cumulative_degrees: cumulative,
        });
        slowdown += SLOWDOWN_STEP;
        remaining -= degrees;
    }

    SpinPlan {
        direction,
        color_swap: showing_opposite_color,
        color_swap_seconds: if showing_opposite_color {
            NOMINAL_SPIN_SECONDS / 2.0
        } else {
            0.0
        },
        total_degrees,
        segments,
    }
}

// ── Wheel state ─────────────────────────────────────────────────

/// The single mutable wheel-state accumulator: current orientation and
/// the polarity color on display. Owned by the screen that renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KarmaWheel {
    rotation_degrees: f64,
    color: WheelColor,
}

impl Default for KarmaWheel {
    fn default() -> Self {
        Self {
            rotation_degrees: 0.0,
            color: WheelColor::Green,
        }
    }
}

impl KarmaWheel {
    /// Current orientation in [0, 360).
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Polarity color currently on display.
    pub fn color(&self) -> WheelColor {
        self.color
    }

    /// Plan a spin for `tip_percentage` and advance the wheel state to
    /// the plan's end, so the next spin continues from there.
    pub fn spin(&mut self, tip_percentage: i32) -> SpinPlan {
        let direction = SpinDirection::for_tip(tip_percentage);
        let expected = direction.expected_color();
        let plan = plan(
            tip_percentage,
            self.rotation_degrees,
            self.color != expected,
        );
        self.rotation_degrees = plan.end_degrees();
        self.color = expected;
        plan
    }
}

// ── Tests ───────────────────────────────────────────────────────
