mod gallery_capture_source;
mod xcap_capture_source;

pub use gallery_capture_source::GalleryCaptureSource;
pub use xcap_capture_source::XcapCaptureSource;
