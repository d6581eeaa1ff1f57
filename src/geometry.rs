//! Tap-coordinate mapping between the displayed image box and the original
//! image's pixel space.

use crate::error::DetectError;

/// Width and height of an image box, in pixels.
///
/// Two of these exist per session: the source resolution of the acquired
/// image and the size of the on-screen box it is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both sides are non-zero.
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A position in the displayed image's local frame.
///
/// Coordinates are sub-pixel floats, matching what touch layers report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapPoint {
    pub x: f64,
    pub y: f64,
}

impl TapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rescale a tap from the displayed box into original pixel space.
///
/// Each axis is scaled independently by `original / displayed`. This assumes
/// the displayed box shares the original's aspect ratio (contain fit with no
/// letterbox bars); taps landing in letterbox padding are not corrected and
/// will map to in-image coordinates. Output keeps sub-pixel precision, so
/// rounding and clamping to valid pixel indices is the sampler's job.
///
/// Fails with [`DetectError::InvalidDisplaySize`] when either displayed side
/// is zero, which would otherwise divide by zero.
pub fn map_to_original(
    tap: TapPoint,
    displayed: Dimensions,
    original: Dimensions,
) -> Result<TapPoint, DetectError> {
    if !displayed.is_positive() {
        return Err(DetectError::InvalidDisplaySize {
            width: displayed.width,
            height: displayed.height,
        });
    }

    let scale_x = original.width as f64 / displayed.width as f64;
    let scale_y = original.height as f64 / displayed.height as f64;

    Ok(TapPoint::new(tap.x * scale_x, tap.y * scale_y))
}
