//! Shared UI widgets — toggle switch, percentage stepper.

use crate::theme::Theme;
use egui::{self, Pos2, Rounding, Sense, Stroke, Vec2};

/// Toggle switch widget. Returns `true` if clicked (toggled).
pub fn toggle_switch(ui: &mut egui::Ui, on: bool, dark: bool) -> bool {
    let desired_size = Vec2::new(38.0, 20.0);
    let (resp, painter) = ui.allocate_painter(desired_size, Sense::click());
    let rect = resp.rect;

    // Track — pill shape
    let pill_rounding = Rounding::same(rect.height() / 2.0);
    let track_bg = if on {
        Theme::accent(dark)
    } else {
        Theme::faded(Theme::text(dark), 0.25)
    };
    painter.rect_filled(rect, pill_rounding, track_bg);
    painter.rect_stroke(
        rect,
        pill_rounding,
        Stroke::new(0.5, Theme::faded(Theme::text(dark), 0.4)),
    );

    // Thumb — smooth animated position
    let thumb_radius = 8.0;
    let anim_t = ui
        .ctx()
        .animate_bool_with_time(resp.id.with("toggle_anim"), on, 0.15);
    let thumb_x = egui::lerp(
        rect.left() + thumb_radius + 2.0..=rect.right() - thumb_radius - 2.0,
        anim_t,
    );
    painter.circle_filled(
        Pos2::new(thumb_x, rect.center().y),
        thumb_radius,
        Theme::input_bg(dark),
    );

    resp.clicked()
}

/// Percentage stepper: −/+ buttons around the current value, clamped to
/// `range`. Returns `true` when the value changed.
pub fn stepper(
    ui: &mut egui::Ui,
    value: &mut i32,
    range: std::ops::RangeInclusive<i32>,
    dark: bool,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(Theme::SPACE_XS, 0.0);

        if step_button(ui, "−", dark) && *value > *range.start() {
            *value -= 1;
            changed = true;
        }

        ui.add_sized(
            Vec2::new(34.0, 24.0),
            egui::Label::new(
                egui::RichText::new(format!("{value}"))
                    .size(Theme::FONT_MD)
                    .color(Theme::text(dark)),
            ),
        );

        if step_button(ui, "+", dark) && *value < *range.end() {
            *value += 1;
            changed = true;
        }
    });
    changed
}

fn step_button(ui: &mut egui::Ui, label: &str, dark: bool) -> bool {
    let size = Vec2::splat(24.0);
    let (resp, painter) = ui.allocate_painter(size, Sense::click());
    let rect = resp.rect;

    let fill = if resp.hovered() {
        Theme::faded(Theme::text(dark), 0.2)
    } else {
        Theme::faded(Theme::text(dark), 0.1)
    };
    painter.rect_filled(rect, Rounding::same(6.0), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(Theme::FONT_MD),
        Theme::text(dark),
    );

    resp.clicked()
}
