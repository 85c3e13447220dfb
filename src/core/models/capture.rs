use std::fmt;
use std::path::PathBuf;

use crate::global_constants::{CAPTURE_ASPECT, CAPTURE_QUALITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    pub aspect: (u32, u32),
    pub allows_editing: bool,
    /// JPEG quality in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            aspect: CAPTURE_ASPECT,
            allows_editing: true,
            quality: CAPTURE_QUALITY,
        }
    }
}

impl CaptureOptions {
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedAsset {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Cancelled,
    Captured(Vec<CapturedAsset>),
}

/// Why a capture attempt produced no image. None of these touch the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureCancelled {
    PermissionDenied,
    Dismissed,
    Unavailable(String),
}

impl fmt::Display for CaptureCancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureCancelled::PermissionDenied => write!(f, "permission denied"),
            CaptureCancelled::Dismissed => write!(f, "dismissed by user"),
            CaptureCancelled::Unavailable(reason) => write!(f, "capture unavailable: {}", reason),
        }
    }
}
