use super::*;

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

fn temp_settings_path(tag: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("print_kiosk_settings_{tag}_{suffix}.toml"))
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let settings =
        load_settings_with_env(&temp_settings_path("missing"), env_from(&[])).expect("defaults");
    assert_eq!(settings, KioskSettings::default());
    assert_eq!(settings.qr_url, "https://example.com");
    assert_eq!(settings.store_database, "print_db");
    assert_eq!(settings.timings().print, Duration::from_secs(3));
}

#[test]
fn file_values_override_defaults_and_env_overrides_file() {
    let path = temp_settings_path("layered");
    fs::write(
        &path,
        "qr_url = \"https://print.example.org/upload\"\nfullscreen = false\nfetch_delay_ms = 10\n",
    )
    .expect("write settings");

    let settings = load_settings_with_env(
        &path,
        env_from(&[
            ("APP__FETCH_DELAY_MS", "25"),
            ("MONGODB_URI", "mongodb://legacy:27017/"),
            ("APP__STORE_URI", "mongodb://preferred:27017/"),
        ]),
    )
    .expect("layered settings");

    assert_eq!(settings.qr_url, "https://print.example.org/upload");
    assert!(!settings.fullscreen);
    assert_eq!(settings.fetch_delay_ms, 25);
    assert_eq!(settings.store_uri, "mongodb://preferred:27017/");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn unparsable_numeric_env_is_ignored() {
    let settings = load_settings_with_env(
        &temp_settings_path("bad_env"),
        env_from(&[("APP__PRINT_DELAY_MS", "soon"), ("APP__FULLSCREEN", "false")]),
    )
    .expect("settings");
    assert_eq!(settings.print_delay_ms, 3000);
    assert!(!settings.fullscreen);
}

#[test]
fn malformed_file_is_rejected() {
    let path = temp_settings_path("malformed");
    fs::write(&path, "qr_url = [not toml").expect("write settings");

    let err = load_settings_with_env(&path, env_from(&[])).expect_err("malformed file");
    assert!(matches!(err, ConfigError::Parse { .. }));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn invalid_qr_url_is_rejected() {
    let settings = load_settings_with_env(
        &temp_settings_path("bad_url"),
        env_from(&[("APP__QR_URL", "not a url")]),
    )
    .expect("loading does not check the url");

    let err = settings.validate_display().expect_err("invalid url");
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn zero_display_size_is_rejected() {
    let settings = load_settings_with_env(
        &temp_settings_path("zero_size"),
        env_from(&[("APP__QR_DISPLAY_SIZE", "0")]),
    )
    .expect("settings");

    let err = settings.validate_display().expect_err("zero size");
    assert!(matches!(
        err,
        ConfigError::InvalidDisplaySize {
            value: 0,
            min: 1,
            max: 4096
        }
    ));
}

#[test]
fn oversized_display_size_is_rejected() {
    let settings = KioskSettings {
        qr_display_size: 100_000,
        ..KioskSettings::default()
    };
    let err = settings.validate_display().expect_err("oversized");
    assert!(matches!(
        err,
        ConfigError::InvalidDisplaySize { value: 100_000, .. }
    ));

    let edge = KioskSettings {
        qr_display_size: 4096,
        ..KioskSettings::default()
    };
    edge.validate_display().expect("upper bound is accepted");
    KioskSettings::default()
        .validate_display()
        .expect("defaults are valid");
}

#[test]
fn bad_qr_url_does_not_block_store_settings() {
    let path = temp_settings_path("store_only");
    fs::write(
        &path,
        "qr_url = \"not a url\"\nstore_uri = \"mongodb://db.internal:27017/\"\n",
    )
    .expect("write settings");

    let settings = load_settings_with_env(&path, env_from(&[])).expect("settings load");
    assert_eq!(settings.store_uri, "mongodb://db.internal:27017/");
    assert!(parse_qr_url(&settings.qr_url).is_err());

    fs::remove_file(path).expect("cleanup");
}
