pub mod app_theme;
mod detection_view;

pub use detection_view::{DetectionView, DetectionViewMessage, ScreenModel};
