use std::{fs, io, ops::RangeInclusive, path::Path};

use serde::Deserialize;
use url::Url;

use crate::{error::ConfigError, simulator::SimulatorTimings};

pub const DEFAULT_SETTINGS_FILE: &str = "kiosk.toml";

/// Accepted edge length, in pixels, for the on-screen QR image.
pub const QR_DISPLAY_SIZE_RANGE: RangeInclusive<u32> = 1..=4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskSettings {
    pub qr_url: String,
    pub qr_image_path: String,
    pub qr_display_size: u32,
    pub fullscreen: bool,
    pub store_uri: String,
    pub store_database: String,
    pub store_collection: String,
    pub store_selection_timeout_ms: u64,
    pub fetch_delay_ms: u64,
    pub print_delay_ms: u64,
    pub collect_delay_ms: u64,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            qr_url: "https://example.com".into(),
            qr_image_path: "qr.png".into(),
            qr_display_size: 300,
            fullscreen: true,
            store_uri: "mongodb://localhost:27017/".into(),
            store_database: "print_db".into(),
            store_collection: "PrintForm".into(),
            store_selection_timeout_ms: 5000,
            fetch_delay_ms: 2000,
            print_delay_ms: 3000,
            collect_delay_ms: 2000,
        }
    }
}

impl KioskSettings {
    pub fn timings(&self) -> SimulatorTimings {
        SimulatorTimings::from_millis(
            self.fetch_delay_ms,
            self.print_delay_ms,
            self.collect_delay_ms,
        )
    }

    /// Checks the fields the kiosk window needs before it generates the QR code.
    pub fn validate_display(&self) -> Result<(), ConfigError> {
        parse_qr_url(&self.qr_url)?;
        if !QR_DISPLAY_SIZE_RANGE.contains(&self.qr_display_size) {
            return Err(ConfigError::InvalidDisplaySize {
                value: self.qr_display_size,
                min: *QR_DISPLAY_SIZE_RANGE.start(),
                max: *QR_DISPLAY_SIZE_RANGE.end(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    qr_url: Option<String>,
    qr_image_path: Option<String>,
    qr_display_size: Option<u32>,
    fullscreen: Option<bool>,
    store_uri: Option<String>,
    store_database: Option<String>,
    store_collection: Option<String>,
    store_selection_timeout_ms: Option<u64>,
    fetch_delay_ms: Option<u64>,
    print_delay_ms: Option<u64>,
    collect_delay_ms: Option<u64>,
}

/// Defaults, then `path` if it exists, then process environment overrides.
///
/// Only the file syntax is checked here; callers validate the fields they use.
pub fn load_settings(path: &Path) -> Result<KioskSettings, ConfigError> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<KioskSettings, ConfigError> {
    let mut settings = KioskSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg =
                toml::from_str::<FileSettings>(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            apply_file(&mut settings, file_cfg);
            tracing::debug!(path = %path.display(), "loaded settings file");
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    apply_env_overrides(&mut settings, env);
    Ok(settings)
}

fn apply_file(settings: &mut KioskSettings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.qr_url {
        settings.qr_url = v;
    }
    if let Some(v) = file_cfg.qr_image_path {
        settings.qr_image_path = v;
    }
    if let Some(v) = file_cfg.qr_display_size {
        settings.qr_display_size = v;
    }
    if let Some(v) = file_cfg.fullscreen {
        settings.fullscreen = v;
    }
    if let Some(v) = file_cfg.store_uri {
        settings.store_uri = v;
    }
    if let Some(v) = file_cfg.store_database {
        settings.store_database = v;
    }
    if let Some(v) = file_cfg.store_collection {
        settings.store_collection = v;
    }
    if let Some(v) = file_cfg.store_selection_timeout_ms {
        settings.store_selection_timeout_ms = v;
    }
    if let Some(v) = file_cfg.fetch_delay_ms {
        settings.fetch_delay_ms = v;
    }
    if let Some(v) = file_cfg.print_delay_ms {
        settings.print_delay_ms = v;
    }
    if let Some(v) = file_cfg.collect_delay_ms {
        settings.collect_delay_ms = v;
    }
}

fn apply_env_overrides(settings: &mut KioskSettings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("APP__QR_URL") {
        settings.qr_url = v;
    }
    if let Some(v) = env("APP__QR_IMAGE_PATH") {
        settings.qr_image_path = v;
    }
    if let Some(v) = parsed_env(&env, "APP__QR_DISPLAY_SIZE") {
        settings.qr_display_size = v;
    }
    if let Some(v) = parsed_env(&env, "APP__FULLSCREEN") {
        settings.fullscreen = v;
    }

    if let Some(v) = env("MONGODB_URI") {
        settings.store_uri = v;
    }
    if let Some(v) = env("APP__STORE_URI") {
        settings.store_uri = v;
    }
    if let Some(v) = env("APP__STORE_DATABASE") {
        settings.store_database = v;
    }
    if let Some(v) = env("APP__STORE_COLLECTION") {
        settings.store_collection = v;
    }
    if let Some(v) = parsed_env(&env, "APP__STORE_SELECTION_TIMEOUT_MS") {
        settings.store_selection_timeout_ms = v;
    }

    if let Some(v) = parsed_env(&env, "APP__FETCH_DELAY_MS") {
        settings.fetch_delay_ms = v;
    }
    if let Some(v) = parsed_env(&env, "APP__PRINT_DELAY_MS") {
        settings.print_delay_ms = v;
    }
    if let Some(v) = parsed_env(&env, "APP__COLLECT_DELAY_MS") {
        settings.collect_delay_ms = v;
    }
}

fn parsed_env<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = env(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(name, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

pub fn parse_qr_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
