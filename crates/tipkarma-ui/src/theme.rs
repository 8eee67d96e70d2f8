//! Light and dark color themes for the sage-green TipKarma palette.

use egui::{Color32, Rounding, Stroke};

/// Central theme. Every color fn takes the dark flag so call sites stay
/// oblivious to which palette is active.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_SM: f32 = 13.0; // captions, the % suffix
    pub const FONT_MD: f32 = 16.0; // labels, buttons
    pub const FONT_LG: f32 = 22.0; // amount labels
    pub const FONT_XL: f32 = 30.0; // the TIP placeholder

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;
    pub const SPACE_LG: f32 = 24.0;

    // ── Border radius ──────────────────────────────────────────
    /// Rounded corners for the TIP button and inputs.
    pub const RADIUS: f32 = 10.0;

    /// How long the background cross-fades when the theme flips.
    pub const FADE_SECONDS: f32 = 0.25;

    // ── Backgrounds ────────────────────────────────────────────
    /// Main screen background: pale sage, or the same at quarter
    /// brightness for the dark theme.
    pub const fn bg(dark: bool) -> Color32 {
        if dark {
            Color32::from_rgb(52, 57, 54)
        } else {
            Color32::from_rgb(210, 228, 216)
        }
    }

    /// Text input background.
    pub const fn input_bg(dark: bool) -> Color32 {
        if dark {
            Color32::from_rgb(169, 169, 169)
        } else {
            Color32::WHITE
        }
    }

    // ── Text ───────────────────────────────────────────────────
    /// Label text: near-black on light, light gray on dark.
    pub const fn text(dark: bool) -> Color32 {
        if dark {
            Color32::from_rgb(169, 169, 169)
        } else {
            Color32::from_rgb(60, 60, 60)
        }
    }

    /// Text typed into the bill field (always dark, both input
    /// backgrounds are light).
    pub const fn input_text() -> Color32 {
        Color32::from_rgb(40, 40, 40)
    }

    // ── Semantic colors ────────────────────────────────────────
    /// Good-karma green.
    pub const fn good() -> Color32 {
        Color32::from_rgb(48, 213, 160)
    }

    /// Bad-karma red.
    pub const fn bad() -> Color32 {
        Color32::from_rgb(255, 88, 85)
    }

    /// The TIP button fill.
    pub const fn accent(dark: bool) -> Color32 {
        if dark {
            Color32::from_rgb(40, 110, 85)
        } else {
            Color32::from_rgb(54, 150, 115)
        }
    }

    // ── Color helpers ──────────────────────────────────────────

    /// Blend a color toward another by `t` (0..1).
    pub fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        Color32::from_rgba_premultiplied(
            (a.r() as f32 * inv + b.r() as f32 * t) as u8,
            (a.g() as f32 * inv + b.g() as f32 * t) as u8,
            (a.b() as f32 * inv + b.b() as f32 * t) as u8,
            (a.a() as f32 * inv + b.a() as f32 * t) as u8,
        )
    }

    /// A color with its alpha scaled by `alpha` (0..1).
    pub fn faded(c: Color32, alpha: f32) -> Color32 {
        c.gamma_multiply(alpha.clamp(0.0, 1.0))
    }

    // ── Theme application ──────────────────────────────────────

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context, dark: bool) {
        Self::apply_blend(ctx, if dark { 1.0 } else { 0.0 });
    }

    /// Apply a blend between the light (t = 0) and dark (t = 1) themes,
    /// used while the settings switch cross-fades the background.
    pub fn apply_blend(ctx: &egui::Context, t: f32) {
        let dark = t >= 0.5;
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        let bg = Self::lerp(Self::bg(false), Self::bg(true), t);
        let text = Self::lerp(Self::text(false), Self::text(true), t);

        visuals.panel_fill = bg;
        visuals.window_fill = bg;
        visuals.extreme_bg_color = Self::input_bg(dark);
        visuals.override_text_color = Some(text);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text);
        visuals.widgets.noninteractive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.stroke = Stroke::new(1.0, Self::accent(dark));

        ctx.set_style(style);
    }
}

// ── Tests ───────────────────────────────────────────────────────
