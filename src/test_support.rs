use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::core::interfaces::adapters::{DetectionService, UserNotifier};
use crate::core::interfaces::ports::CaptureSource;
use crate::core::models::{
    CaptureOptions, CaptureOutcome, CapturedAsset, DetectionResult, ImageReference,
    PermissionStatus,
};

/// Local HTTP responder that answers exactly one request with a canned reply.
pub struct OneShotHttpServer {
    pub url: String,
    received: Arc<Mutex<Option<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl OneShotHttpServer {
    pub async fn start(status_line: &str, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let received = Arc::new(Mutex::new(None));
        let received_slot = Arc::clone(&received);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_full_request(&mut socket).await;
            *received_slot.lock().unwrap() = Some(request);
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        Self {
            url: format!("http://{}/leaf-detection/2", address),
            received,
            handle,
        }
    }

    pub async fn received_request(self) -> String {
        self.handle.await.unwrap();
        self.received.lock().unwrap().take().unwrap_or_default()
    }
}

async fn read_full_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if request_is_complete(&buffer) {
            break;
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

fn request_is_complete(buffer: &[u8]) -> bool {
    let Some(header_end) = buffer.windows(4).position(|window| window == b"\r\n\r\n") else {
        return false;
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_ascii_lowercase();
    let body_len = buffer.len() - (header_end + 4);

    if let Some(length) = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
    {
        return body_len >= length;
    }

    if headers.contains("transfer-encoding: chunked") {
        return buffer.ends_with(b"0\r\n\r\n");
    }

    true
}

pub fn write_sample_jpeg(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("leaf-detection-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);

    let image = image::RgbImage::from_pixel(8, 6, image::Rgb([34, 139, 34]));
    image
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();

    path
}

/// Capture source that replays a queue of outcomes, one per launch.
pub struct MockCaptureSource {
    permission: PermissionStatus,
    outcomes: Mutex<Vec<anyhow::Result<CaptureOutcome>>>,
    launched_with: Mutex<Vec<CaptureOptions>>,
}

impl MockCaptureSource {
    pub fn new(permission: PermissionStatus, outcomes: Vec<anyhow::Result<CaptureOutcome>>) -> Self {
        Self {
            permission,
            outcomes: Mutex::new(outcomes),
            launched_with: Mutex::new(Vec::new()),
        }
    }

    pub fn capturing(paths: Vec<PathBuf>) -> Self {
        let outcomes = paths
            .into_iter()
            .map(|path| Ok(CaptureOutcome::Captured(vec![CapturedAsset { path }])))
            .collect();
        Self::new(PermissionStatus::Granted, outcomes)
    }

    pub fn launch_count(&self) -> usize {
        self.launched_with.lock().unwrap().len()
    }

    pub fn launched_with(&self) -> Vec<CaptureOptions> {
        self.launched_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptureSource for MockCaptureSource {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn launch_capture(&self, options: &CaptureOptions) -> anyhow::Result<CaptureOutcome> {
        self.launched_with.lock().unwrap().push(*options);
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(CaptureOutcome::Cancelled);
        }
        outcomes.remove(0)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserNotifier for RecordingNotifier {
    async fn alert(&self, _title: &str, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}

/// Detection service answering with a fixed outcome and recording what it was sent.
pub struct MockDetectionService {
    outcome: Result<serde_json::Value, String>,
    submissions: Mutex<Vec<(String, String)>>,
}

impl MockDetectionService {
    pub fn succeeding(payload: serde_json::Value) -> Self {
        Self {
            outcome: Ok(payload),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl DetectionService for MockDetectionService {
    async fn submit(&self, image: &ImageReference, api_key: &str) -> anyhow::Result<DetectionResult> {
        self.submissions
            .lock()
            .unwrap()
            .push((image.uri.clone(), api_key.to_string()));

        match &self.outcome {
            Ok(payload) => Ok(DetectionResult::from_payload(payload.clone())),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}
