//! TipKarma UI - egui screens and widgets
//!
//! Provides the UI components:
//! - Light/dark theme
//! - Karma wheel widget and spin playback
//! - Currency formatting and bill parsing
//! - Primary and settings screens

pub mod anim;
pub mod format;
pub mod primary;
pub mod settings_screen;
pub mod theme;
pub mod wheel;
pub mod widgets;

pub use anim::{SpinPlayback, WheelFrame};
pub use format::{format_currency, parse_bill};
pub use primary::{PrimaryAction, PrimaryScreen};
pub use settings_screen::{SettingsAction, SettingsScreen};
pub use theme::Theme;
pub use wheel::KarmaWheelWidget;
