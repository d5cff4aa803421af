//! Unit tests for the settings file layer.

use std::time::Duration;

use gesturebutton::settings::{GestureSettings, SettingsError};

#[test]
fn test_defaults_match_the_gesture_constants() {
    let settings = GestureSettings::default();
    assert_eq!(settings.long_press_delay_ms, 500);
    assert_eq!(settings.double_tap_timeout_ms, 200);
    assert_eq!(settings.repeat_delay_ms, 500);
    assert_eq!(settings.repeat_interval_ms, 100);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = GestureSettings {
        long_press_delay_ms: 800,
        ..Default::default()
    };
    settings.save_to(&path).unwrap();

    assert_eq!(GestureSettings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_save_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.json");

    GestureSettings::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = GestureSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "long_press_delay_ms": 900 }"#).unwrap();

    let settings = GestureSettings::load_from(&path).unwrap();
    assert_eq!(settings.long_press_delay_ms, 900);
    assert_eq!(settings.double_tap_timeout_ms, 200);
}

#[test]
fn test_unknown_field_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "bogus_delay_ms": 900 }"#).unwrap();

    let err = GestureSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
}

#[test]
fn test_to_config_converts_milliseconds() {
    let settings = GestureSettings {
        long_press_delay_ms: 800,
        double_tap_timeout_ms: 300,
        repeat_delay_ms: 600,
        repeat_interval_ms: 50,
    };
    let config = settings.to_config();
    assert_eq!(config.long_press_delay, Duration::from_millis(800));
    assert_eq!(config.double_tap_timeout, Duration::from_millis(300));
    assert_eq!(config.repeat_delay, Duration::from_millis(600));
    assert_eq!(config.repeat_interval, Duration::from_millis(50));
}
