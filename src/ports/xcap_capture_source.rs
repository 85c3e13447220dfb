use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;

use crate::adapters::macos_permissions;
use crate::core::interfaces::adapters::UserNotifier;
use crate::core::interfaces::ports::CaptureSource;
use crate::core::models::{CaptureOptions, CaptureOutcome, PermissionStatus};
use crate::global_constants::LOG_TAG_CAPTURE;
use crate::infrastructure::capture_processing;

const CONFIRM_TITLE: &str = "Use this capture?";

/// Takes a photo of the primary monitor, then lets the user keep or discard it.
pub struct XcapCaptureSource {
    notifier: Arc<dyn UserNotifier>,
    output_dir: PathBuf,
}

impl XcapCaptureSource {
    pub fn initialize(notifier: Arc<dyn UserNotifier>) -> Self {
        log::debug!("{} initializing xcap capture source", LOG_TAG_CAPTURE);
        Self {
            notifier,
            output_dir: std::env::temp_dir(),
        }
    }

    fn find_primary_monitor() -> Result<xcap::Monitor> {
        let monitors = xcap::Monitor::all().context("Unable to list monitors")?;

        let primary_index = monitors
            .iter()
            .position(|monitor| monitor.is_primary().unwrap_or(false))
            .unwrap_or(0);

        monitors
            .into_iter()
            .nth(primary_index)
            .ok_or_else(|| anyhow::anyhow!("No monitor available for capture"))
    }

    fn capture_primary_monitor() -> Result<DynamicImage> {
        let monitor = Self::find_primary_monitor()?;
        let captured = monitor
            .capture_image()
            .context("Unable to capture monitor")?;

        Self::convert_capture_to_image(captured)
    }

    fn convert_capture_to_image(captured: xcap::image::RgbaImage) -> Result<DynamicImage> {
        let width_pixels = captured.width();
        let height_pixels = captured.height();

        log::info!(
            "{} captured {}x{} screenshot",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels
        );

        let rgba = image::RgbaImage::from_raw(width_pixels, height_pixels, captured.into_raw())
            .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }
}

#[async_trait]
impl CaptureSource for XcapCaptureSource {
    async fn request_permission(&self) -> PermissionStatus {
        if macos_permissions::macos::request_screen_capture_permission() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn launch_capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome> {
        let image = tokio::task::spawn_blocking(Self::capture_primary_monitor).await??;

        let description = format!(
            "Captured a {}x{} image. Send it for leaf detection?",
            image.width(),
            image.height()
        );
        if !self.notifier.confirm(CONFIRM_TITLE, &description).await {
            log::info!("{} capture discarded by user", LOG_TAG_CAPTURE);
            return Ok(CaptureOutcome::Cancelled);
        }

        let options = *options;
        let output_dir = self.output_dir.clone();
        let asset = tokio::task::spawn_blocking(move || {
            capture_processing::store_capture(image, &options, &output_dir)
        })
        .await??;

        Ok(CaptureOutcome::Captured(vec![asset]))
    }
}
