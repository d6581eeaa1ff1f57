//! Core color-identification pipeline for HueVision
//!
//! Maps a tap on a displayed (scaled) image back into the original image's
//! pixel space, asks an external sampling service for the RGB value at that
//! point, classifies it against a fixed named-color palette, and keeps a
//! short history of results.
//!
//! The crate is UI-free. Image acquisition, layout, and speech stay in the
//! presentation layer, which owns a [`DetectionSession`], feeds it events,
//! and renders whatever comes back.

pub mod error;
pub mod geometry;
pub mod history;
pub mod palette;
pub mod sampler;
pub mod session;

pub use error::DetectError;
pub use geometry::{map_to_original, Dimensions, TapPoint};
pub use history::{ColorHistory, HISTORY_CAPACITY};
pub use palette::{
    classify, DetectionResult, NamedColor, Palette, Rgb, COLOR_NOT_FOUND, NAMED_COLORS,
};
pub use sampler::{HttpPixelSampler, ImagePayload, PixelSampler};
pub use session::DetectionSession;
