mod dialog_user_notifier;
pub mod macos_permissions;
mod roboflow_detection_service;

pub use dialog_user_notifier::DialogUserNotifier;
pub use roboflow_detection_service::RoboflowDetectionService;
