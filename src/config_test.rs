#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// env_parse
// =============================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__SLIDE_TEST_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__SLIDE_TEST_EP_VALID__", " 12.5 ") };
    let val: f64 = env_parse("__SLIDE_TEST_EP_VALID__", 0.0);
    assert_eq!(val, 12.5);
    unsafe { std::env::remove_var("__SLIDE_TEST_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__SLIDE_TEST_EP_INVALID__", "notabool") };
    let val: bool = env_parse("__SLIDE_TEST_EP_INVALID__", true);
    assert!(val);
    unsafe { std::env::remove_var("__SLIDE_TEST_EP_INVALID__") };
}

// =============================================================
// EditorConfig
// =============================================================

#[test]
fn defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.grid_pitch, 20.0);
    assert!(config.snap_enabled);
    assert_eq!(config.inline_asset_limit_bytes, 2 * 1024 * 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_fills_missing_keys() {
    let config = EditorConfig::from_json(r#"{"snapEnabled": false}"#).unwrap();
    assert!(!config.snap_enabled);
    assert_eq!(config.grid_pitch, 20.0);
    assert!(!config.snap().is_active());
}

#[test]
fn from_json_reads_all_keys() {
    let config =
        EditorConfig::from_json(r#"{"gridPitch": 10, "snapEnabled": true, "inlineAssetLimitBytes": 1024}"#).unwrap();
    assert_eq!(config.grid_pitch, 10.0);
    assert_eq!(config.inline_asset_limit_bytes, 1024);
    assert_eq!(config.snap(), GridSnap::new(10.0, true));
}

#[test]
fn from_json_rejects_malformed() {
    let err = EditorConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, EditError::InvalidConfig(_)));
    assert_eq!(err.error_code(), "E_INVALID_CONFIG");
}

#[test]
fn from_json_rejects_non_positive_pitch() {
    assert!(matches!(EditorConfig::from_json(r#"{"gridPitch": 0}"#), Err(EditError::InvalidConfig(_))));
    assert!(matches!(EditorConfig::from_json(r#"{"gridPitch": -5}"#), Err(EditError::InvalidConfig(_))));
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(EditorConfig::default()).unwrap();
    assert_eq!(json["gridPitch"], 20.0);
    assert_eq!(json["snapEnabled"], true);
    assert!(json.get("inlineAssetLimitBytes").is_some());
}

// =============================================================
// from_env
// =============================================================

#[test]
fn invalid_pitch_falls_back_to_default() {
    for pitch in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
        let config = EditorConfig { grid_pitch: pitch, snap_enabled: true, ..Default::default() }.or_default_pitch();
        assert_eq!(config.grid_pitch, DEFAULT_GRID_PITCH, "pitch {pitch}");
        assert!(config.snap_enabled);
        assert!(config.validate().is_ok());
    }
}

#[test]
fn valid_pitch_is_kept() {
    let config = EditorConfig { grid_pitch: 8.0, ..Default::default() }.or_default_pitch();
    assert_eq!(config.grid_pitch, 8.0);
}

#[test]
fn from_env_rejects_negative_pitch() {
    unsafe { std::env::set_var("SLIDE_GRID_PITCH", "-5") };
    let config = EditorConfig::from_env();
    unsafe { std::env::remove_var("SLIDE_GRID_PITCH") };
    assert_eq!(config.grid_pitch, DEFAULT_GRID_PITCH);
    assert_eq!(config.snap(), GridSnap::new(DEFAULT_GRID_PITCH, config.snap_enabled));
}
