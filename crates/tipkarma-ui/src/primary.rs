//! The primary screen: bill entry, tip stepper, TIP button, karma wheel.
//!
//! Amounts are only recomputed when the TIP button is pressed, so the
//! labels are gated: as soon as the live inputs drift from the committed
//! result the amounts hide and the TIP placeholder invites a recompute.

use egui::{self, Rounding, RichText, Ui, Vec2};
use serde::{Deserialize, Serialize};

use crate::format::{format_currency, parse_bill};
use crate::theme::Theme;
use crate::wheel::KarmaWheelWidget;
use crate::widgets::stepper;
use tipkarma_core::{compute, AccuracyGate};
use tipkarma_settings::Settings;

/// Navigation requests returned from the primary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    OpenSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryScreen {
    bill_text: String,
    tip_percentage: i32,
    gate: AccuracyGate,
    wheel: KarmaWheelWidget,
}

impl Default for PrimaryScreen {
    fn default() -> Self {
        Self {
            bill_text: String::new(),
            tip_percentage: tipkarma_settings::DEFAULT_TIP_PERCENT,
            gate: AccuracyGate::default(),
            wheel: KarmaWheelWidget::default(),
        }
    }
}

impl PrimaryScreen {
    /// Called when the screen (re)appears: pick up the default tip
    /// percentage and restore a recent bill amount. The field is only
    /// reformatted when the restored amount actually differs, so typing
    /// like `12.5` survives a round-trip to settings.
    pub fn on_show(&mut self, settings: &Settings, now_secs: f64) {
        self.tip_percentage = settings.tip_percentage();

        let restored = settings.remembered_bill(now_secs);
        if self.bill_amount() != restored {
            self.bill_text = format!("{:.2}", restored);
        }
    }

    /// Called when the screen disappears: remember the bill amount so a
    /// relaunch within ten minutes restores it.
    pub fn on_hide(&self, settings: &mut Settings, now_secs: f64) {
        settings.remember_bill(self.bill_amount(), now_secs);
    }

    /// The parsed bill amount (0.0 when the field is unparseable).
    pub fn bill_amount(&self) -> f64 {
        parse_bill(&self.bill_text)
    }

    /// The TIP button action: recompute, commit, spin.
    fn press_tip(&mut self) {
        let result = compute(self.bill_amount(), self.tip_percentage);
        self.gate.commit(result);
        self.wheel.spin(self.tip_percentage);
    }

    pub fn show(&mut self, ui: &mut Ui, dark: bool) -> Option<PrimaryAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(RichText::new("TipKarma").color(Theme::text(dark)));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙").clicked() {
                    action = Some(PrimaryAction::OpenSettings);
                }
            });
        });
        ui.add_space(Theme::SPACE_LG);

        // Bill entry
        ui.label(
            RichText::new("Bill")
                .size(Theme::FONT_MD)
                .color(Theme::text(dark)),
        );
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.bill_text)
                .hint_text("0.00")
                .font(egui::FontId::proportional(Theme::FONT_LG))
                .text_color(Theme::input_text())
                .desired_width(160.0),
        );
        if response.changed() {
            self.bill_text = sanitize_bill_text(&self.bill_text);
        }
        ui.add_space(Theme::SPACE_MD);

        // Tip percentage
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Tip")
                    .size(Theme::FONT_MD)
                    .color(Theme::text(dark)),
            );
            stepper(ui, &mut self.tip_percentage, 0..=100, dark);
            ui.label(
                RichText::new("%")
                    .size(Theme::FONT_SM)
                    .color(Theme::text(dark)),
            );
        });
        ui.add_space(Theme::SPACE_MD);

        // The TIP button
        let tip_button = egui::Button::new(
            RichText::new("TIP")
                .size(Theme::FONT_MD)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(Theme::accent(dark))
        .rounding(Rounding::same(Theme::RADIUS))
        .min_size(Vec2::new(120.0, 36.0));
        if ui.add(tip_button).clicked() {
            self.press_tip();
        }
        ui.add_space(Theme::SPACE_LG);

        // Committed amounts, hidden whenever the live inputs drift.
        let current = compute(self.bill_amount(), self.tip_percentage);
        let hidden = self.gate.should_hide(&current, true);
        let amount_alpha = if hidden { 0.0 } else { 1.0 };
        let last = self.gate.last();

        amount_row(ui, "Tip Amount", last.tip_amount, amount_alpha, dark);
        amount_row(ui, "Total", last.total_amount, amount_alpha, dark);

        if hidden {
            ui.label(
                RichText::new("TIP")
                    .size(Theme::FONT_XL)
                    .color(Theme::faded(Theme::text(dark), 0.35)),
            );
        }
        ui.add_space(Theme::SPACE_LG);

        ui.vertical_centered(|ui| {
            self.wheel.show(ui, 140.0);
        });

        action
    }
}

fn amount_row(ui: &mut Ui, label: &str, amount: f64, alpha: f32, dark: bool) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(label)
                .size(Theme::FONT_MD)
                .color(Theme::text(dark)),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format_currency(amount))
                    .size(Theme::FONT_LG)
                    .color(Theme::faded(Theme::text(dark), alpha)),
            );
        });
    });
}

/// Keep only digits and the first decimal point.
fn sanitize_bill_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_dot = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}

// ── Tests ───────────────────────────────────────────────────────
