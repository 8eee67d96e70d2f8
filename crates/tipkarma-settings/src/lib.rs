//! TipKarma Settings - Persisted preferences and bill memory
//!
//! A small versioned JSON store holding the default tip percentage, the
//! dark-theme flag, and the last-entered bill amount (remembered for ten
//! minutes so a quick relaunch restores it). Every load failure degrades
//! silently to documented defaults; nothing here is fatal.

pub mod error;
pub mod store;

pub use error::{Result, SettingsError};
pub use store::{Settings, SettingsFile, SettingsStore, BILL_MEMORY_SECONDS, DEFAULT_TIP_PERCENT};
