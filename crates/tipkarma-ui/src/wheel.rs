//! The karma wheel — three arced arrows painted in a circle.
//!
//! Good karma spins clockwise, with the arrows, in green; bad karma
//! spins counterclockwise, against them, in red. The widget owns the
//! wheel-state accumulator plus whatever spin is currently playing.

use egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};

use crate::anim::{SpinPlayback, WheelFrame};
use crate::theme::Theme;
use tipkarma_core::KarmaWheel;

/// Arc sweep of each of the three arrows, leaving a gap before the next.
const ARROW_SWEEP_DEGREES: f32 = 80.0;

/// Number of line segments used to approximate one arc.
const ARC_STEPS: usize = 24;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KarmaWheelWidget {
    wheel: KarmaWheel,
    #[serde(skip)]
    playback: Option<SpinPlayback>,
}

impl KarmaWheelWidget {
    /// Start a spin for `tip_percentage`.
    ///
    /// A spin requested while one is still playing replaces it: the wheel
    /// state already sits at the previous plan's end, so the new plan
    /// starts from a consistent orientation (the on-screen wheel jumps
    /// to it, it never tears).
    pub fn spin(&mut self, tip_percentage: i32) {
        let start = self.wheel.rotation_degrees();
        let from_color = self.wheel.color();
        let plan = self.wheel.spin(tip_percentage);
        self.playback = Some(SpinPlayback::new(plan, start, from_color));
    }

    /// Whether a spin is currently playing.
    pub fn spinning(&self) -> bool {
        self.playback.is_some()
    }

    /// Draw the wheel at `diameter` and advance any running spin.
    pub fn show(&mut self, ui: &mut Ui, diameter: f32) {
        let (resp, painter) = ui.allocate_painter(Vec2::splat(diameter), Sense::hover());

        let frame = match self.playback.as_mut() {
            Some(playback) => {
                let dt = ui.input(|i| i.stable_dt) as f64;
                let frame = playback.tick(dt);
                if frame.finished {
                    self.playback = None;
                }
                ui.ctx().request_repaint();
                frame
            }
            None => WheelFrame::resting(self.wheel.rotation_degrees(), self.wheel.color()),
        };

        paint_wheel(&painter, resp.rect.center(), diameter / 2.0, &frame);
    }
}

/// Paint the green and red wheels stacked, blended by the frame alphas.
fn paint_wheel(painter: &egui::Painter, center: Pos2, radius: f32, frame: &WheelFrame) {
    let stroke_width = (radius * 0.16).max(2.0);
    let arc_radius = radius - stroke_width;
    let angle = frame.angle_degrees as f32;

    for (color, alpha) in [
        (Theme::good(), frame.green_alpha),
        (Theme::bad(), frame.red_alpha),
    ] {
        if alpha <= 0.0 {
            continue;
        }
        let color = Theme::faded(color, alpha);
        for arm in 0..3 {
            let start = angle + arm as f32 * 120.0;
            paint_arrow(painter, center, arc_radius, start, stroke_width, color);
        }
    }
}

/// One arced arrow: an arc stroke plus a tangential head at its tip.
fn paint_arrow(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_degrees: f32,
    stroke_width: f32,
    color: Color32,
) {
    let points: Vec<Pos2> = (0..=ARC_STEPS)
        .map(|i| {
            let t = i as f32 / ARC_STEPS as f32;
            point_at(center, radius, start_degrees + t * ARROW_SWEEP_DEGREES)
        })
        .collect();
    let tip = point_at(center, radius, start_degrees + ARROW_SWEEP_DEGREES);
    painter.add(Shape::line(points, Stroke::new(stroke_width, color)));

    // Arrowhead pointing along the clockwise tangent.
    let tip_angle = (start_degrees + ARROW_SWEEP_DEGREES).to_radians();
    let tangent = Vec2::new(-tip_angle.sin(), tip_angle.cos());
    let outward = Vec2::new(tip_angle.cos(), tip_angle.sin());
    let size = stroke_width * 2.2;
    painter.add(Shape::convex_polygon(
        vec![
            tip + tangent * size,
            tip + outward * size * 0.8,
            tip - outward * size * 0.8,
        ],
        color,
        Stroke::NONE,
    ));
}

/// A point on the circle. Screen y grows downward, so increasing degrees
/// move clockwise, matching the wheel's sign convention.
fn point_at(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let rad = degrees.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}

// ── Tests ───────────────────────────────────────────────────────
