//! The settings screen: default tip percentage and color theme.
//!
//! The theme switch takes effect immediately (the host cross-fades the
//! background); both values are persisted only when Back is pressed.

use egui::{self, RichText, Ui};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::widgets::{stepper, toggle_switch};
use tipkarma_settings::Settings;

/// Navigation requests returned from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Back,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsScreen {
    tip_percentage: i32,
    dark_theme: bool,
}

impl SettingsScreen {
    /// Seed the controls from the persisted settings.
    pub fn on_show(&mut self, settings: &Settings) {
        self.tip_percentage = settings.tip_percentage();
        self.dark_theme = settings.dark_theme;
    }

    /// The live dark-theme choice, applied by the host before saving.
    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// Write the edited values back into the settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.default_tip_percentage = self.tip_percentage;
        settings.dark_theme = self.dark_theme;
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<SettingsAction> {
        let dark = self.dark_theme;
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                action = Some(SettingsAction::Back);
            }
            ui.heading(RichText::new("Settings").color(Theme::text(dark)));
        });
        ui.add_space(Theme::SPACE_LG);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Default Tip")
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

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Dark Theme")
                    .size(Theme::FONT_MD)
                    .color(Theme::text(dark)),
            );
            if toggle_switch(ui, self.dark_theme, dark) {
                self.dark_theme = !self.dark_theme;
            }
        });

        action
    }
}

// ── Tests ───────────────────────────────────────────────────────
