mod detection_service;
mod user_notifier;

pub use detection_service::DetectionService;
pub use user_notifier::UserNotifier;
