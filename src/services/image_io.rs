//! Image decode/encode between files and [`PixelGrid`]s.

use crate::error::AppError;
use crate::models::OutputConfig;
use image::codecs::jpeg::JpegEncoder;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, ImageFormat, RgbImage, RgbaImage};
use pixel_transform::{PixelGrid, TransformError};
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

/// Decode any supported image file into a grid.
///
/// Every decoded pixel is expanded to RGBA8 first, so formats without alpha
/// come out fully opaque.
pub fn decode(path: &Path) -> Result<PixelGrid, AppError> {
    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => {
            AppError::ImageNotFound {
                path: path.to_path_buf(),
            }
        }
        source => AppError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let grid = PixelGrid::from_rgba_bytes(width as usize, height as usize, rgba.as_raw())
        .map_err(TransformError::from)?;

    tracing::debug!(path = %path.display(), width, height, "Decoded image");
    Ok(grid)
}

/// Encode a grid to `path`, choosing the format from its extension.
///
/// JPEG is always written as RGB at `options.jpeg_quality`. Other formats
/// are RGBA when `options.preserve_alpha` is set and RGB otherwise.
///
/// The image is encoded in memory first; `path` is only created once
/// encoding has succeeded.
pub fn encode(grid: &PixelGrid, path: &Path, options: &OutputConfig) -> Result<(), AppError> {
    let format = ImageFormat::from_path(path).map_err(|_| AppError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let encode_err = |source: ImageError| AppError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let rgb = rgb_image(grid, width, height).map_err(encode_err)?;
            let quality = options.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut buffer, quality)
                .encode_image(&rgb)
                .map_err(encode_err)?;
        }
        _ if options.preserve_alpha => {
            let rgba = RgbaImage::from_raw(width, height, grid.to_rgba_bytes())
                .ok_or_else(dimension_mismatch)
                .map_err(encode_err)?;
            rgba.write_to(&mut buffer, format).map_err(encode_err)?;
        }
        _ => {
            let rgb = rgb_image(grid, width, height).map_err(encode_err)?;
            rgb.write_to(&mut buffer, format).map_err(encode_err)?;
        }
    }
    fs::write(path, buffer.into_inner())?;

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        format = ?format,
        "Encoded image"
    );
    Ok(())
}

fn rgb_image(grid: &PixelGrid, width: u32, height: u32) -> Result<RgbImage, ImageError> {
    RgbImage::from_raw(width, height, grid.to_rgb_bytes()).ok_or_else(dimension_mismatch)
}

fn dimension_mismatch() -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(
        ParameterErrorKind::DimensionMismatch,
    ))
}
