//! Settings persistence with versioning and migration.
//!
//! Uses JSON with a schema version field for forward-compatible
//! persistence. The store never fails a caller that just wants values:
//! a missing or unreadable file yields `Settings::default()`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, SettingsError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Tip percentage used when no default has been saved. A stored value of
/// 0 means "unset", so 0 is not usable as a default tip percentage.
pub const DEFAULT_TIP_PERCENT: i32 = 15;

/// How long a remembered bill amount stays valid.
pub const BILL_MEMORY_SECONDS: f64 = 600.0;

// ── Values ──────────────────────────────────────────────────────

/// The persisted values. Fields are individually defaulted so a file
/// written by an older build still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Default tip percentage; 0 means never set.
    #[serde(default)]
    pub default_tip_percentage: i32,
    /// Dark color theme on. Off (light) by default.
    #[serde(default)]
    pub dark_theme: bool,
    /// Last-entered bill amount, restored on a quick relaunch.
    #[serde(default)]
    pub last_bill_amount: f64,
    /// Unix seconds when the bill amount was saved; 0 means never saved.
    #[serde(default)]
    pub bill_saved_at: f64,
}

impl Settings {
    /// The effective default tip percentage, substituting 15 for "unset".
    pub fn tip_percentage(&self) -> i32 {
        if self.default_tip_percentage != 0 {
            self.default_tip_percentage
        } else {
            DEFAULT_TIP_PERCENT
        }
    }

    /// Record the bill amount together with the current wall-clock time.
    pub fn remember_bill(&mut self, amount: f64, now_secs: f64) {
        self.last_bill_amount = amount;
        self.bill_saved_at = now_secs;
    }

    /// The remembered bill amount, or 0.0 if it was never saved or more
    /// than ten minutes have elapsed since it was.
    pub fn remembered_bill(&self, now_secs: f64) -> f64 {
        if self.bill_saved_at != 0.0 && now_secs - self.bill_saved_at < BILL_MEMORY_SECONDS {
            self.last_bill_amount
        } else {
            0.0
        }
    }
}

// ── File format ─────────────────────────────────────────────────

/// Versioned settings file wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Schema version for migration.
    pub version: u32,
    /// The settings data.
    pub settings: Settings,
    /// Application version that wrote this file.
    pub app_version: String,
}

impl SettingsFile {
    /// Wrap settings for writing.
    pub fn new(settings: Settings) -> Self {
        Self {
            version: CURRENT_VERSION,
            settings,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })
    }

    /// Deserialize from JSON bytes, applying migrations if needed.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| SettingsError::Serialization(format!("Invalid JSON: {}", e)))?;

        let version = raw.get("version").and_then(|v| v.as_u64()).unwrap_or(0) as u32;

        if version > CURRENT_VERSION {
            return Err(SettingsError::Serialization(format!(
                "Settings file version {} is newer than supported version {}",
                version, CURRENT_VERSION
            )));
        }

        let migrated = migrate(raw, version)?;

        serde_json::from_value(migrated)
            .map_err(|e| SettingsError::Serialization(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a file path.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load settings from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}

/// Apply sequential migrations from `from_version` to CURRENT_VERSION.
fn migrate(mut data: serde_json::Value, from_version: u32) -> Result<serde_json::Value> {
    let mut version = from_version;

    while version < CURRENT_VERSION {
        match version {
            0 => {
                // v0 → v1: bare settings object with no version wrapper
                if data.get("version").is_none() {
                    data = serde_json::json!({
                        "version": 1,
                        "settings": data,
                        "app_version": "0.1.0",
                    });
                }
                version = 1;
            }
            _ => {
                return Err(SettingsError::Serialization(format!(
                    "No migration path from version {}",
                    version
                )));
            }
        }
    }

    Ok(data)
}

// ── Store ───────────────────────────────────────────────────────

/// On-disk settings store bound to a file path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the platform config location
    /// (e.g. `~/.config/tipkarma/settings.json`). Falls back to the
    /// current directory when no config dir exists.
    pub fn at_default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("tipkarma").join("settings.json"),
        }
    }

    /// Store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, substituting defaults when the file is missing or
    /// unreadable. Never fails.
    pub fn load(&self) -> Settings {
        match SettingsFile::load_from_file(&self.path) {
            Ok(file) => {
                debug!(path = %self.path.display(), "loaded settings");
                file.settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings unreadable, using defaults");
                Settings::default()
            }
        }
    }

    /// Save settings, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        SettingsFile::new(settings.clone()).save_to_file(&self.path)?;
        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────
