mod capture;
mod detection_result;
mod image_reference;
mod user_settings;
mod view_state;

pub use capture::{
    CaptureCancelled, CaptureOptions, CaptureOutcome, CapturedAsset, PermissionStatus,
};
pub use detection_result::DetectionResult;
pub use image_reference::{file_uri_to_path, path_to_file_uri, ImageReference};
pub use user_settings::{CaptureSourceKind, ThemeMode, UserSettings};
pub use view_state::{AttemptToken, Phase, ViewState};
