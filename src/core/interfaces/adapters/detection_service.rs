use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{DetectionResult, ImageReference};

#[async_trait]
pub trait DetectionService: Send + Sync {
    async fn submit(&self, image: &ImageReference, api_key: &str) -> Result<DetectionResult>;
}
