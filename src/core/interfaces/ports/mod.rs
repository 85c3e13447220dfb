mod capture_source;

pub use capture_source::CaptureSource;
