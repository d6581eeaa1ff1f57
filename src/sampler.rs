//! Pixel-sampling collaborator seam
//!
//! The core never decodes images: reading the RGB value under a tap is done
//! by an external sampling service. [`PixelSampler`] is the seam, and
//! [`HttpPixelSampler`] speaks the backend's JSON contract:
//! `POST {"image": "<data URI>", "x": .., "y": ..}`, answered with
//! `{"r": .., "g": .., "b": ..}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::DetectError;
use crate::geometry::TapPoint;
use crate::palette::Rgb;

/// Opaque image payload handed through to the sampling service.
///
/// Holds a ready-to-send data URI; image pickers typically deliver the
/// picked image as base64-encoded JPEG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data_uri: String,
}

impl ImagePayload {
    /// Wrap base64-encoded JPEG data, adding the data URI prefix.
    pub fn from_base64_jpeg(base64: &str) -> Self {
        Self {
            data_uri: format!("data:image/jpeg;base64,{}", base64),
        }
    }

    /// Wrap an already complete data URI.
    pub fn from_data_uri(data_uri: impl Into<String>) -> Self {
        Self {
            data_uri: data_uri.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data_uri
    }
}

/// Reads the color under a pixel coordinate of an image payload.
///
/// One call per tap; a failed call is terminal for that tap, and retrying
/// is the caller's decision (the call has no side effects to repeat).
/// Implementations receive sub-pixel coordinates and are responsible for
/// rounding and clamping them to valid pixel indices.
#[async_trait]
pub trait PixelSampler: Send + Sync {
    async fn sample(&self, image: &ImagePayload, point: TapPoint) -> Result<Rgb, DetectError>;
}

/// Request body for the sampling endpoint
#[derive(Debug, Serialize)]
pub(crate) struct SampleRequest<'a> {
    pub image: &'a str,
    pub x: f64,
    pub y: f64,
}

/// Response body of the sampling endpoint.
///
/// Channels parse as plain integers so an out-of-range value is reported
/// for what it is instead of disappearing into a deserialization error.
#[derive(Debug, Deserialize)]
pub(crate) struct SampleResponse {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl SampleResponse {
    /// Validate channel ranges and convert to a sample.
    ///
    /// Out-of-range channels signal [`DetectError::SampleOutOfRange`]
    /// rather than clamping, so a broken sampler shows up immediately.
    pub fn into_rgb(self) -> Result<Rgb, DetectError> {
        let r = channel("r", self.r)?;
        let g = channel("g", self.g)?;
        let b = channel("b", self.b)?;
        Ok(Rgb::new(r, g, b))
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, DetectError> {
    u8::try_from(value).map_err(|_| DetectError::SampleOutOfRange {
        channel: name,
        value,
    })
}

/// Samples pixels over HTTP from a remote sampling service
pub struct HttpPixelSampler {
    client: Client,
    endpoint: String,
}

impl HttpPixelSampler {
    /// `endpoint` is the full URL of the service's detect route, e.g.
    /// `http://192.168.1.160:5050/detect-color`.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PixelSampler for HttpPixelSampler {
    async fn sample(&self, image: &ImagePayload, point: TapPoint) -> Result<Rgb, DetectError> {
        tracing::debug!(
            "Sampling pixel at ({:.1}, {:.1}) from {}",
            point.x,
            point.y,
            self.endpoint
        );

        let request = SampleRequest {
            image: image.as_str(),
            x: point.x,
            y: point.y,
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(DetectError::SamplerStatus(response.status()));
        }

        let body: SampleResponse = response.json().await?;
        body.into_rgb()
    }
}
