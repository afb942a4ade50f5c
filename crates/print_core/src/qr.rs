use std::path::Path;

use image::{imageops::FilterType, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::QrError;

/// Smallest edge, in pixels, of the generated PNG before display scaling.
const MIN_RENDER_DIMENSION: u32 = 300;

/// Decoded QR artifact ready to be uploaded as a texture.
#[derive(Debug, Clone)]
pub struct QrRgba {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn write_qr_png(url: &str, path: &Path) -> Result<(), QrError> {
    let code = QrCode::new(url.as_bytes()).map_err(|err| QrError::Encode {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_RENDER_DIMENSION, MIN_RENDER_DIMENSION)
        .build();

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| QrError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(url, path = %path.display(), "wrote qr code image");
    Ok(())
}

/// Loads the QR PNG and resamples it to a `size x size` RGBA buffer.
pub fn load_qr_rgba(path: &Path, size: u32) -> Result<QrRgba, QrError> {
    let decoded = image::open(path).map_err(|source| QrError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let resized = decoded
        .resize_exact(size, size, FilterType::Lanczos3)
        .to_rgba8();
    let (width, height) = resized.dimensions();
    Ok(QrRgba {
        width: width as usize,
        height: height as usize,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
#[path = "tests/qr_tests.rs"]
mod tests;
