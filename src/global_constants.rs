pub const APPLICATION_NAME: &str = "leaf-detection-pc";
pub const APPLICATION_TITLE: &str = "Leaf Detection";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_UPLOAD: &str = "[UPLOAD]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_PERMISSIONS: &str = "[PERMISSIONS]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_DIALOG: &str = "[DIALOG]";
pub const LOG_TAG_VIEW_STATE: &str = "[VIEW_STATE]";
pub const LOG_TAG_IMAGE_REFERENCE: &str = "[IMAGE_REFERENCE]";

pub const SCAN_BUTTON_LABEL: &str = "Scan Image";
pub const RESULT_TITLE: &str = "Detection Result:";
pub const ERROR_LINE_PREFIX: &str = "Error: ";

pub const PERMISSION_ALERT_TITLE: &str = "Permission required";
pub const PERMISSION_ALERT_MESSAGE: &str = "Camera permission is required!";

pub const STATUS_IDLE: &str = "Ready - press Scan Image to capture a leaf";
pub const STATUS_CAPTURING: &str = "Waiting for capture...";
pub const STATUS_UPLOADING: &str = "Sending image for detection...";
pub const STATUS_RESOLVED: &str = "Detection complete";
pub const STATUS_FAILED: &str = "Detection failed";

pub const DETECTION_ENDPOINT_URL: &str = "https://detect.roboflow.com/leaf-detection-r0kih/2";
pub const DEFAULT_API_KEY: &str = "";

pub const UPLOAD_FIELD_NAME: &str = "file";
pub const UPLOAD_FILE_NAME: &str = "leaf.jpg";
pub const UPLOAD_MIME_TYPE: &str = "image/jpeg";

pub const CAPTURE_ASPECT: (u32, u32) = (4, 3);
pub const CAPTURE_QUALITY: f32 = 1.0;
pub const CAPTURE_FILE_PREFIX: &str = "leaf_detection_capture";

pub const GALLERY_DIALOG_TITLE: &str = "Select a leaf photo";
pub const GALLERY_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp"];

pub const PREVIEW_SIZE: f32 = 200.0;
pub const WINDOW_WIDTH: f32 = 520.0;
pub const WINDOW_HEIGHT: f32 = 760.0;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
