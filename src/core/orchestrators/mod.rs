pub mod app_orchestrator;
mod capture_adapter;

pub use capture_adapter::CaptureAdapter;
