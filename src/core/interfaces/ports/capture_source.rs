use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{CaptureOptions, CaptureOutcome, PermissionStatus};

#[async_trait]
pub trait CaptureSource: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn launch_capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome>;
}
