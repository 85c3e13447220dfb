use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::CaptureSource;
use crate::core::models::{CaptureOptions, CaptureOutcome, CapturedAsset, PermissionStatus};
use crate::global_constants::{GALLERY_DIALOG_TITLE, GALLERY_IMAGE_EXTENSIONS, LOG_TAG_CAPTURE};
use crate::infrastructure::capture_processing;

/// Lets the user pick an existing photo through the native file dialog.
pub struct GalleryCaptureSource {
    output_dir: PathBuf,
}

impl GalleryCaptureSource {
    pub fn initialize() -> Self {
        log::debug!("{} initializing gallery capture source", LOG_TAG_CAPTURE);
        Self {
            output_dir: std::env::temp_dir(),
        }
    }

    fn prepare_picked_image(
        picked_path: &Path,
        options: &CaptureOptions,
        output_dir: &Path,
    ) -> Result<CapturedAsset> {
        let image = image::open(picked_path)
            .with_context(|| format!("Unable to open {}", picked_path.display()))?;

        capture_processing::store_capture(image, options, output_dir)
    }
}

#[async_trait]
impl CaptureSource for GalleryCaptureSource {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn launch_capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome> {
        let picked = rfd::AsyncFileDialog::new()
            .set_title(GALLERY_DIALOG_TITLE)
            .add_filter("Images", GALLERY_IMAGE_EXTENSIONS)
            .pick_file()
            .await;

        let Some(file_handle) = picked else {
            log::info!("{} gallery picker closed without a selection", LOG_TAG_CAPTURE);
            return Ok(CaptureOutcome::Cancelled);
        };

        let picked_path = file_handle.path().to_path_buf();
        log::info!("{} picked {:?}", LOG_TAG_CAPTURE, picked_path);

        let options = *options;
        let output_dir = self.output_dir.clone();
        let asset = tokio::task::spawn_blocking(move || {
            Self::prepare_picked_image(&picked_path, &options, &output_dir)
        })
        .await??;

        Ok(CaptureOutcome::Captured(vec![asset]))
    }
}
