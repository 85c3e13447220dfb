use std::sync::Arc;

use crate::core::interfaces::adapters::UserNotifier;
use crate::core::interfaces::ports::CaptureSource;
use crate::core::models::{
    CaptureCancelled, CaptureOptions, CaptureOutcome, ImageReference, PermissionStatus,
};
use crate::global_constants::{LOG_TAG_CAPTURE, PERMISSION_ALERT_MESSAGE, PERMISSION_ALERT_TITLE};

pub struct CaptureAdapter {
    capture_source: Arc<dyn CaptureSource>,
    notifier: Arc<dyn UserNotifier>,
    options: CaptureOptions,
}

impl CaptureAdapter {
    pub fn build(capture_source: Arc<dyn CaptureSource>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            capture_source,
            notifier,
            options: CaptureOptions::default(),
        }
    }

    /// Alerts the user once when the capture source refuses access.
    pub async fn ensure_permission(&self) -> Result<(), CaptureCancelled> {
        log::info!("{} requesting capture permission", LOG_TAG_CAPTURE);

        if self.capture_source.request_permission().await == PermissionStatus::Denied {
            log::warn!("{} permission denied, alerting user", LOG_TAG_CAPTURE);
            self.notifier
                .alert(PERMISSION_ALERT_TITLE, PERMISSION_ALERT_MESSAGE)
                .await;
            return Err(CaptureCancelled::PermissionDenied);
        }

        Ok(())
    }

    pub async fn launch_capture(&self) -> Result<ImageReference, CaptureCancelled> {
        log::debug!("{} launching capture with {:?}", LOG_TAG_CAPTURE, self.options);

        let outcome = self
            .capture_source
            .launch_capture(&self.options)
            .await
            .map_err(|e| {
                log::error!("{} capture failed: {:#}", LOG_TAG_CAPTURE, e);
                CaptureCancelled::Unavailable(e.to_string())
            })?;

        match outcome {
            CaptureOutcome::Cancelled => {
                log::info!("{} capture dismissed by user", LOG_TAG_CAPTURE);
                Err(CaptureCancelled::Dismissed)
            }
            CaptureOutcome::Captured(assets) => {
                let Some(first_asset) = assets.into_iter().next() else {
                    log::warn!("{} capture returned no assets", LOG_TAG_CAPTURE);
                    return Err(CaptureCancelled::Dismissed);
                };

                let image = ImageReference::from_path(&first_asset.path);
                log::info!("{} captured image at {}", LOG_TAG_CAPTURE, image.uri);
                Ok(image)
            }
        }
    }
}
