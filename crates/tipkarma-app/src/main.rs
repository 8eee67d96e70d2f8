//! TipKarma - Tip calculator with a karma wheel
//!
//! Entry point and screen routing. Tipping well spins the wheel
//! clockwise in green; tipping poorly spins it backwards in red.

use anyhow::Result;
use eframe::egui;
use tipkarma_settings::{Settings, SettingsStore};
use tipkarma_ui::{PrimaryAction, PrimaryScreen, SettingsAction, SettingsScreen, Theme};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("TipKarma starting...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 600.0])
            .with_title("TipKarma"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "TipKarma",
        options,
        Box::new(|cc| Ok(Box::new(TipKarmaApp::new(cc)))),
    )?;

    Ok(())
}

/// Wall-clock seconds since the Unix epoch, passed into every API that
/// stamps or checks the bill memory. Nothing below main reads the clock.
fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// The two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Primary,
    Settings,
}

struct TipKarmaApp {
    store: SettingsStore,
    settings: Settings,
    screen: Screen,
    primary: PrimaryScreen,
    settings_screen: SettingsScreen,
    /// Last theme blend pushed into the egui style, so the style is only
    /// rewritten while the cross-fade is actually moving.
    applied_blend: f32,
}

impl TipKarmaApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = SettingsStore::at_default_location();
        let settings = store.load();

        let mut primary = PrimaryScreen::default();
        primary.on_show(&settings, now_secs());

        let blend = if settings.dark_theme { 1.0 } else { 0.0 };
        Theme::apply_blend(&cc.egui_ctx, blend);

        Self {
            store,
            settings,
            screen: Screen::Primary,
            primary,
            settings_screen: SettingsScreen::default(),
            applied_blend: blend,
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.settings) {
            warn!(error = %e, "failed to save settings");
        }
    }

    /// Primary → Settings: the primary screen is disappearing, so the
    /// bill memory is stamped now.
    fn open_settings(&mut self) {
        self.primary.on_hide(&mut self.settings, now_secs());
        self.persist();
        self.settings_screen.on_show(&self.settings);
        self.screen = Screen::Settings;
    }

    /// Settings → Primary: commit the edits, then let the reappearing
    /// primary screen pick up the new default percentage.
    fn close_settings(&mut self) {
        self.settings_screen.apply_to(&mut self.settings);
        self.persist();
        self.primary.on_show(&self.settings, now_secs());
        self.screen = Screen::Primary;
    }

    /// The dark flag currently in effect: the settings screen previews
    /// its switch immediately, before anything is saved.
    fn dark_in_effect(&self) -> bool {
        match self.screen {
            Screen::Primary => self.settings.dark_theme,
            Screen::Settings => self.settings_screen.dark_theme(),
        }
    }
}

impl eframe::App for TipKarmaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark = self.dark_in_effect();
        let blend = ctx.animate_bool_with_time(
            egui::Id::new("dark_theme_fade"),
            dark,
            Theme::FADE_SECONDS,
        );
        if (blend - self.applied_blend).abs() > f32::EPSILON {
            Theme::apply_blend(ctx, blend);
            self.applied_blend = blend;
        }

        let frame = egui::Frame::none()
            .fill(Theme::lerp(Theme::bg(false), Theme::bg(true), blend))
            .inner_margin(egui::Margin::same(Theme::SPACE_LG));

        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| match self.screen {
                Screen::Primary => {
                    if let Some(PrimaryAction::OpenSettings) = self.primary.show(ui, dark) {
                        self.open_settings();
                    }
                }
                Screen::Settings => {
                    if let Some(SettingsAction::Back) = self.settings_screen.show(ui) {
                        self.close_settings();
                    }
                }
            });
    }

    fn on_exit(&mut self) {
        if self.screen == Screen::Primary {
            self.primary.on_hide(&mut self.settings, now_secs());
        }
        self.persist();
        info!("TipKarma exiting");
    }
}
