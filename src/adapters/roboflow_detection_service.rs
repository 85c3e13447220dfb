use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::DetectionService;
use crate::core::models::{DetectionResult, ImageReference};
use crate::global_constants::{
    LOG_TAG_UPLOAD, UPLOAD_FIELD_NAME, UPLOAD_FILE_NAME, UPLOAD_MIME_TYPE,
};

pub struct RoboflowDetectionService {
    client: reqwest::Client,
    endpoint_url: String,
}

impl RoboflowDetectionService {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    fn build_request_url(&self, api_key: &str) -> String {
        let separator = if self.endpoint_url.contains('?') { '&' } else { '?' };

        format!(
            "{}{}api_key={}",
            self.endpoint_url,
            separator,
            urlencoding::encode(api_key)
        )
    }

    async fn read_image_bytes(&self, image: &ImageReference) -> Result<Vec<u8>> {
        let image_path = image.local_path()?;

        log::debug!("{} Reading image from {:?}", LOG_TAG_UPLOAD, image_path);

        tokio::fs::read(&image_path)
            .await
            .with_context(|| format!("Failed to read image at {}", image_path.display()))
    }

    fn build_form(&self, image_bytes: Vec<u8>) -> Result<reqwest::multipart::Form> {
        let part = reqwest::multipart::Part::bytes(image_bytes)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME_TYPE)?;

        Ok(reqwest::multipart::Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

#[async_trait]
impl DetectionService for RoboflowDetectionService {
    async fn submit(&self, image: &ImageReference, api_key: &str) -> Result<DetectionResult> {
        log::info!("{} Uploading {} for detection", LOG_TAG_UPLOAD, image.uri);

        let image_bytes = self.read_image_bytes(image).await?;
        let form = self.build_form(image_bytes)?;

        let response = self
            .client
            .post(self.build_request_url(api_key))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        log::debug!("{} Detection response ({}): {}", LOG_TAG_UPLOAD, status, response_text);

        if !status.is_success() {
            let body = response_text.trim();
            if body.is_empty() {
                anyhow::bail!("Request failed with status code {}", status.as_u16());
            }
            anyhow::bail!("Request failed with status code {}: {}", status.as_u16(), body);
        }

        let payload: serde_json::Value = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse detection response: {}", e))?;

        log::info!("{} Detection response received", LOG_TAG_UPLOAD);
        Ok(DetectionResult::from_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_sample_jpeg, OneShotHttpServer};
    use serde_json::json;

    #[test]
    fn test_build_request_url_appends_empty_api_key() {
        let service = RoboflowDetectionService::new("https://detect.example.com/model/2");

        assert_eq!(
            service.build_request_url(""),
            "https://detect.example.com/model/2?api_key="
        );
    }

    #[test]
    fn test_build_request_url_encodes_api_key() {
        let service = RoboflowDetectionService::new("https://detect.example.com/model/2");

        assert_eq!(
            service.build_request_url("a b&c"),
            "https://detect.example.com/model/2?api_key=a%20b%26c"
        );
    }

    #[test]
    fn test_build_request_url_keeps_existing_query() {
        let service = RoboflowDetectionService::new("https://detect.example.com/model/2?format=json");

        assert_eq!(
            service.build_request_url("k"),
            "https://detect.example.com/model/2?format=json&api_key=k"
        );
    }

    #[tokio::test]
    async fn test_submit_returns_parsed_body_on_success() {
        let server = OneShotHttpServer::start("200 OK", "application/json", r#"{"ok": true}"#).await;
        let service = RoboflowDetectionService::new(server.url.clone());
        let image = ImageReference::from_path(&write_sample_jpeg("capture.jpg"));

        let result = service.submit(&image, "").await.unwrap();

        assert_eq!(result.payload(), &json!({"ok": true}));
        server.received_request().await;
    }

    #[tokio::test]
    async fn test_submit_sends_single_jpeg_part_with_api_key_query() {
        let server = OneShotHttpServer::start("200 OK", "application/json", "{}").await;
        let service = RoboflowDetectionService::new(server.url.clone());
        let image = ImageReference::from_path(&write_sample_jpeg("original-name.png"));

        service.submit(&image, "secret").await.unwrap();
        let request = server.received_request().await;

        assert!(request.starts_with("POST /leaf-detection/2?api_key=secret HTTP/1.1"));
        assert!(request.contains("multipart/form-data; boundary="));
        assert!(request.contains("name=\"file\"; filename=\"leaf.jpg\""));
        assert!(request.contains("Content-Type: image/jpeg"));
        assert!(!request.contains("original-name.png"));
    }

    #[tokio::test]
    async fn test_submit_reports_server_error_text() {
        let server = OneShotHttpServer::start(
            "500 Internal Server Error",
            "text/plain",
            "Server Error",
        )
        .await;
        let service = RoboflowDetectionService::new(server.url.clone());
        let image = ImageReference::from_path(&write_sample_jpeg("capture.jpg"));

        let error = service.submit(&image, "").await.unwrap_err();

        assert_eq!(
            error.to_string(),
            "Request failed with status code 500: Server Error"
        );
        server.received_request().await;
    }

    #[tokio::test]
    async fn test_submit_reports_status_without_body() {
        let server = OneShotHttpServer::start("403 Forbidden", "text/plain", "").await;
        let service = RoboflowDetectionService::new(server.url.clone());
        let image = ImageReference::from_path(&write_sample_jpeg("capture.jpg"));

        let error = service.submit(&image, "").await.unwrap_err();

        assert_eq!(error.to_string(), "Request failed with status code 403");
        server.received_request().await;
    }

    #[tokio::test]
    async fn test_submit_reports_unparseable_body() {
        let server = OneShotHttpServer::start("200 OK", "text/html", "<html>oops</html>").await;
        let service = RoboflowDetectionService::new(server.url.clone());
        let image = ImageReference::from_path(&write_sample_jpeg("capture.jpg"));

        let error = service.submit(&image, "").await.unwrap_err();

        assert!(error.to_string().starts_with("Failed to parse detection response"));
        server.received_request().await;
    }

    #[tokio::test]
    async fn test_submit_fails_for_missing_image() {
        let service = RoboflowDetectionService::new("http://127.0.0.1:9/unused");
        let image = ImageReference::from_captured_uri("file:///definitely/not/here.jpg");

        let error = service.submit(&image, "").await.unwrap_err();

        assert!(error.to_string().contains("Failed to read image"));
    }

    #[tokio::test]
    async fn test_submit_reports_network_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let service = RoboflowDetectionService::new(format!("http://{}/model", address));
        let image = ImageReference::from_path(&write_sample_jpeg("capture.jpg"));

        let error = service.submit(&image, "").await.unwrap_err();

        assert!(!error.to_string().is_empty());
    }
}
