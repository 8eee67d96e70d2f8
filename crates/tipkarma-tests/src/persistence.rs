//! Integration tests for settings persistence through real files.

use tipkarma_settings::{Settings, SettingsStore};

// ── Helpers ────────────────────────────────────────────────────

/// A store rooted in a per-test temp directory.
fn temp_store(tag: &str) -> SettingsStore {
    let dir = std::env::temp_dir().join(format!("tipkarma-tests-{}-{tag}", std::process::id()));
    SettingsStore::at_path(dir.join("settings.json"))
}

fn cleanup(store: &SettingsStore) {
    if let Some(dir) = store.path().parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

// ── Round trips ────────────────────────────────────────────────

#[test]
fn save_and_reload_preserves_values() {
    let store = temp_store("roundtrip");

    let mut settings = Settings {
        default_tip_percentage: 18,
        dark_theme: true,
        ..Settings::default()
    };
    settings.remember_bill(42.50, 1000.0);
    store.save(&settings).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.remembered_bill(1300.0), 42.50);
    assert_eq!(loaded.remembered_bill(1700.0), 0.0);

    cleanup(&store);
}

#[test]
fn tip_zero_roundtrips_to_fifteen() {
    let store = temp_store("unset-tip");

    // 0 is "never set": it persists, but reads back as the 15% default.
    store.save(&Settings::default()).unwrap();
    assert_eq!(store.load().tip_percentage(), 15);

    let settings = Settings {
        default_tip_percentage: 5,
        ..Settings::default()
    };
    store.save(&settings).unwrap();
    assert_eq!(store.load().tip_percentage(), 5);

    cleanup(&store);
}

#[test]
fn v0_file_migrates_on_load() {
    let store = temp_store("migrate");

    // A bare v0 settings object, no version wrapper.
    let v0 = serde_json::json!({
        "default_tip_percentage": 20,
        "dark_theme": true,
    });
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), serde_json::to_vec(&v0).unwrap()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.default_tip_percentage, 20);
    assert!(loaded.dark_theme);

    cleanup(&store);
}

// ── Degraded paths ─────────────────────────────────────────────

#[test]
fn corrupt_file_degrades_to_defaults() {
    let store = temp_store("corrupt");

    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), b"{ not json").unwrap();

    assert_eq!(store.load(), Settings::default());

    cleanup(&store);
}

#[test]
fn missing_file_degrades_to_defaults() {
    let store = temp_store("missing");
    let loaded = store.load();
    assert_eq!(loaded, Settings::default());
    assert_eq!(loaded.tip_percentage(), 15);
    assert!(!loaded.dark_theme);
    assert_eq!(loaded.remembered_bill(12345.0), 0.0);
}
