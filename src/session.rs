//! Session state and the tap-to-name detection flow
//!
//! The presentation layer owns a [`DetectionSession`] and forwards three
//! events into it: a new image was acquired, the rendered box size is known,
//! and the user tapped a point. Everything in the pipeline is pure
//! computation except the single await on the sampling service.

use std::sync::Arc;

use crate::error::DetectError;
use crate::geometry::{map_to_original, Dimensions, TapPoint};
use crate::history::ColorHistory;
use crate::palette::{DetectionResult, Palette};
use crate::sampler::{ImagePayload, PixelSampler};

/// The acquired image: its payload for the sampler plus its source
/// resolution for coordinate mapping.
#[derive(Debug, Clone)]
struct LoadedImage {
    payload: ImagePayload,
    original: Dimensions,
}

/// Explicit state for one image-viewing session.
///
/// Holds what would otherwise live as ambient screen state: the current
/// image, the displayed box size once layout reports it, the bounded result
/// history, and the last successful detection. `detect` takes `&mut self`,
/// so lookups through one session cannot overlap and history order is
/// completion order.
pub struct DetectionSession {
    sampler: Arc<dyn PixelSampler>,
    palette: Palette,
    image: Option<LoadedImage>,
    displayed: Option<Dimensions>,
    history: ColorHistory,
    last: Option<DetectionResult>,
}

impl DetectionSession {
    /// New session with the built-in palette.
    pub fn new(sampler: Arc<dyn PixelSampler>) -> Self {
        Self::with_palette(sampler, Palette::default())
    }

    pub fn with_palette(sampler: Arc<dyn PixelSampler>, palette: Palette) -> Self {
        Self {
            sampler,
            palette,
            image: None,
            displayed: None,
            history: ColorHistory::new(),
            last: None,
        }
    }

    /// A new image was picked or captured.
    ///
    /// Clears the history and the last result: they never span two source
    /// images. The displayed size is also forgotten until layout reports
    /// the new image's rendered box.
    ///
    /// Fails with [`DetectError::InvalidImageSize`] when the acquisition
    /// layer hands over an empty resolution.
    pub fn load_image(
        &mut self,
        payload: ImagePayload,
        original: Dimensions,
    ) -> Result<(), DetectError> {
        if !original.is_positive() {
            return Err(DetectError::InvalidImageSize {
                width: original.width,
                height: original.height,
            });
        }

        tracing::info!("New image loaded at {}x{}", original.width, original.height);

        self.image = Some(LoadedImage { payload, original });
        self.displayed = None;
        self.history.clear();
        self.last = None;

        Ok(())
    }

    /// The rendered on-screen box size, reported by the layout pass.
    pub fn set_displayed(&mut self, displayed: Dimensions) -> Result<(), DetectError> {
        if !displayed.is_positive() {
            return Err(DetectError::InvalidDisplaySize {
                width: displayed.width,
                height: displayed.height,
            });
        }

        self.displayed = Some(displayed);
        Ok(())
    }

    /// Identify the color under a tap on the displayed image.
    ///
    /// Maps the tap into original pixel space, asks the sampler for the
    /// color there, classifies it, and records the result. On failure the
    /// history and last result stay untouched; failures for which
    /// [`DetectError::is_upstream`] is true are expected in normal operation
    /// and should surface as a non-fatal notice.
    ///
    /// The returned result's `name` is the string for the speech
    /// collaborator; its `Display` form is the line shown and recorded.
    pub async fn detect(&mut self, tap: TapPoint) -> Result<DetectionResult, DetectError> {
        let image = self.image.as_ref().ok_or(DetectError::ImageNotLoaded)?;
        let displayed = self.displayed.ok_or(DetectError::LayoutNotReady)?;

        let mapped = map_to_original(tap, displayed, image.original)?;
        tracing::debug!(
            "Tap ({:.1}, {:.1}) mapped to ({:.1}, {:.1})",
            tap.x,
            tap.y,
            mapped.x,
            mapped.y
        );

        let sample = self.sampler.sample(&image.payload, mapped).await?;
        let name = self.palette.classify(sample);
        let result = DetectionResult { name, sample };

        tracing::info!("Detected {}", result);

        self.history.record(&result);
        self.last = Some(result.clone());

        Ok(result)
    }

    /// Recent results, newest first.
    pub fn history(&self) -> &ColorHistory {
        &self.history
    }

    /// The last successful detection for the current image.
    pub fn last_detection(&self) -> Option<&DetectionResult> {
        self.last.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn displayed(&self) -> Option<Dimensions> {
        self.displayed
    }
}
