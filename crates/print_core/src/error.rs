use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to encode '{url}' as a QR code: {reason}")]
    Encode { url: String, reason: String },
    #[error("failed to write QR image '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to load QR image '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unreachable at '{uri}': {source}")]
    Unreachable {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("existence probe on {database}.{collection} failed: {source}")]
    Probe {
        database: String,
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid qr_url '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("qr_display_size {value} is outside {min}..={max}")]
    InvalidDisplaySize { value: u32, min: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("failed to spawn order simulator worker: {0}")]
    Spawn(#[from] io::Error),
}

/// The receiving side of a status sink has gone away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("status sink closed")]
pub struct SinkClosed;
