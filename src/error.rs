//! Error types for the detection core

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("displayed image size must be positive, got {width}x{height}")]
    InvalidDisplaySize { width: u32, height: u32 },

    #[error("original image size must be positive, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("no image has been loaded")]
    ImageNotLoaded,

    #[error("displayed image size is not known yet")]
    LayoutNotReady,

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("sample channel {channel} out of range: {value}")]
    SampleOutOfRange { channel: &'static str, value: i64 },

    #[error("sampling service returned status: {0}")]
    SamplerStatus(StatusCode),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl DetectError {
    /// True for failures of the sampling round-trip itself (network or
    /// service errors). These occur in normal operation and should surface
    /// as a non-fatal notice. Every other variant is a wiring or setup bug
    /// in the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DetectError::SamplerStatus(_) | DetectError::HttpClient(_)
        )
    }
}
