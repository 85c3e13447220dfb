use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::core::models::{CaptureOptions, CapturedAsset};
use crate::global_constants::{CAPTURE_FILE_PREFIX, LOG_TAG_CAPTURE};

pub fn crop_to_aspect(image: DynamicImage, aspect: (u32, u32)) -> DynamicImage {
    let (aspect_width, aspect_height) = aspect;
    if aspect_width == 0 || aspect_height == 0 {
        return image;
    }

    let width = image.width() as u64;
    let height = image.height() as u64;
    let aspect_width = aspect_width as u64;
    let aspect_height = aspect_height as u64;

    let (crop_width, crop_height) = if width * aspect_height > height * aspect_width {
        (height * aspect_width / aspect_height, height)
    } else {
        (width, width * aspect_height / aspect_width)
    };

    if crop_width == 0 || crop_height == 0 || (crop_width == width && crop_height == height) {
        return image;
    }

    let x = (width - crop_width) / 2;
    let y = (height - crop_height) / 2;

    log::debug!(
        "{} cropping {}x{} to {}x{} at ({}, {})",
        LOG_TAG_CAPTURE,
        width,
        height,
        crop_width,
        crop_height,
        x,
        y
    );

    image.crop_imm(x as u32, y as u32, crop_width as u32, crop_height as u32)
}

pub fn write_jpeg(image: &DynamicImage, quality: u8, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);

    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_with_encoder(encoder)
        .with_context(|| format!("Failed to encode JPEG at {}", output_path.display()))
}

/// Applies the capture options and stores the result as a fresh JPEG in `output_dir`.
pub fn store_capture(
    image: DynamicImage,
    options: &CaptureOptions,
    output_dir: &Path,
) -> Result<CapturedAsset> {
    let edited = if options.allows_editing {
        crop_to_aspect(image, options.aspect)
    } else {
        image
    };

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let output_path = unique_capture_path(output_dir);
    write_jpeg(&edited, options.jpeg_quality(), &output_path)?;

    log::info!(
        "{} stored {}x{} capture at {:?}",
        LOG_TAG_CAPTURE,
        edited.width(),
        edited.height(),
        output_path
    );

    Ok(CapturedAsset { path: output_path })
}

fn unique_capture_path(output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}_{}.jpg", CAPTURE_FILE_PREFIX, uuid::Uuid::new_v4()))
}
