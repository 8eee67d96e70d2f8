//! Animation driver for karma-wheel spins.
//!
//! A `SpinPlan` is a queue of timed rotation segments; the host animates
//! them strictly in order, one at a time, with the color cross-fade (if
//! any) running concurrently from the start of the plan. `SpinPlayback`
//! does exactly that: feed it frame deltas, get back the wheel pose.

use tipkarma_core::{SpinPlan, WheelColor};

/// The wheel pose for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelFrame {
    /// Wheel orientation in degrees, wrapped to [0, 360).
    pub angle_degrees: f64,
    pub green_alpha: f32,
    pub red_alpha: f32,
    /// Whether the plan has been fully played.
    pub finished: bool,
}

impl WheelFrame {
    /// The pose of an idle wheel.
    pub fn resting(angle_degrees: f64, color: WheelColor) -> Self {
        let green = matches!(color, WheelColor::Green);
        Self {
            angle_degrees: angle_degrees.rem_euclid(360.0),
            green_alpha: if green { 1.0 } else { 0.0 },
            red_alpha: if green { 0.0 } else { 1.0 },
            finished: true,
        }
    }
}

/// Plays a `SpinPlan` segment-by-segment.
#[derive(Debug, Clone)]
pub struct SpinPlayback {
    plan: SpinPlan,
    start_degrees: f64,
    /// Alphas at plan start: (green, red).
    from: (f32, f32),
    segment: usize,
    segment_elapsed: f64,
    /// Sweep of all completed segments.
    traveled_degrees: f64,
    fade_elapsed: f64,
}

impl SpinPlayback {
    /// Start playing `plan`. `start_degrees` is the wheel orientation
    /// before the spin and `from_color` the polarity color it showed.
    pub fn new(plan: SpinPlan, start_degrees: f64, from_color: WheelColor) -> Self {
        let green = matches!(from_color, WheelColor::Green);
        Self {
            plan,
            start_degrees,
            from: if green { (1.0, 0.0) } else { (0.0, 1.0) },
            segment: 0,
            segment_elapsed: 0.0,
            traveled_degrees: 0.0,
            fade_elapsed: 0.0,
        }
    }

    /// Wheel orientation at plan start.
    pub fn start_degrees(&self) -> f64 {
        self.start_degrees
    }

    /// Whether every segment has been consumed.
    pub fn finished(&self) -> bool {
        self.segment >= self.plan.segments.len()
    }

    /// Advance by `dt` seconds and return the pose to draw.
    pub fn tick(&mut self, dt: f64) -> WheelFrame {
        self.fade_elapsed += dt;

        // Consume segment time strictly in order. Each segment runs to
        // completion before the next starts.
        let mut dt = dt.max(0.0);
        while dt > 0.0 && self.segment < self.plan.segments.len() {
            let seg = &self.plan.segments[self.segment];
            let left = seg.seconds - self.segment_elapsed;
            if dt < left {
                self.segment_elapsed += dt;
                dt = 0.0;
            } else {
                dt -= left;
                self.traveled_degrees += seg.degrees;
                self.segment += 1;
                self.segment_elapsed = 0.0;
            }
        }

        // Linear interpolation inside the active segment.
        let partial = match self.plan.segments.get(self.segment) {
            Some(seg) if seg.seconds > 0.0 => seg.degrees * (self.segment_elapsed / seg.seconds),
            _ => 0.0,
        };
        let swept = self.traveled_degrees + partial;
        let angle = self.start_degrees + self.plan.direction.signum() * swept;

        let (green_alpha, red_alpha) = self.alphas();

        WheelFrame {
            angle_degrees: angle.rem_euclid(360.0),
            green_alpha,
            red_alpha,
            finished: self.finished(),
        }
    }

    /// Cross-fade progress applied to the starting alphas.
    fn alphas(&self) -> (f32, f32) {
        if !self.plan.color_swap {
            return self.from;
        }
        let t = if self.plan.color_swap_seconds > 0.0 {
            (self.fade_elapsed / self.plan.color_swap_seconds).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        let (green, red) = self.from;
        (green + (red - green) * t, red + (green - red) * t)
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tipkarma_core::plan;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_segments_play_in_sequence() {
        // 15% from zero: four 90° segments lasting 1s, 1.5s, 2s, 2.5s.
        let mut playback = SpinPlayback::new(plan(15, 0.0, false), 0.0, WheelColor::Green);

        let frame = playback.tick(0.5);
        assert!((frame.angle_degrees - 45.0).abs() < EPS);
        assert!(!frame.finished);

        let frame = playback.tick(0.5);
        assert!((frame.angle_degrees - 90.0).abs() < EPS);

        // Halfway through the second (1.5s) segment.
        let frame = playback.tick(0.75);
        assert!((frame.angle_degrees - 135.0).abs() < EPS);

        // Run past the end: lands exactly on the plan's end orientation.
        let frame = playback.tick(100.0);
        assert!(frame.finished);
        assert!((frame.angle_degrees - 0.0).abs() < EPS);
    }

    #[test]
    fn test_one_large_tick_crosses_segments() {
        let mut playback = SpinPlayback::new(plan(15, 0.0, false), 0.0, WheelColor::Green);

        // 2.5s = 1s (90°) + 1.5s (90°) → exactly two segments done.
        let frame = playback.tick(2.5);
        assert!((frame.angle_degrees - 180.0).abs() < EPS);
        assert!(!frame.finished);
    }

    #[test]
    fn test_counterclockwise_goes_negative() {
        let mut playback = SpinPlayback::new(plan(0, 0.0, false), 0.0, WheelColor::Red);

        let frame = playback.tick(playback.plan.segments[0].seconds);
        assert!((frame.angle_degrees - 270.0).abs() < EPS);
    }

    #[test]
    fn test_color_fade_runs_concurrently() {
        // Green wheel spinning bad: fades green → red over 2 seconds.
        let mut playback = SpinPlayback::new(plan(0, 0.0, true), 0.0, WheelColor::Green);

        let frame = playback.tick(0.0);
        assert!((frame.green_alpha - 1.0).abs() < 1e-6);

        let frame = playback.tick(1.0);
        assert!((frame.green_alpha - 0.5).abs() < 1e-6);
        assert!((frame.red_alpha - 0.5).abs() < 1e-6);

        let frame = playback.tick(1.0);
        assert!((frame.green_alpha - 0.0).abs() < 1e-6);
        assert!((frame.red_alpha - 1.0).abs() < 1e-6);
        // The fade is done but the wheel is still spinning.
        assert!(!frame.finished);
    }

    #[test]
    fn test_no_swap_keeps_alphas() {
        let mut playback = SpinPlayback::new(plan(20, 0.0, false), 0.0, WheelColor::Green);
        let frame = playback.tick(3.0);
        assert!((frame.green_alpha - 1.0).abs() < 1e-6);
        assert!((frame.red_alpha - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_starts_from_carried_rotation() {
        let mut playback = SpinPlayback::new(plan(15, 45.0, false), 45.0, WheelColor::Green);
        let frame = playback.tick(0.5);
        assert!((frame.angle_degrees - 90.0).abs() < EPS);
    }
}
