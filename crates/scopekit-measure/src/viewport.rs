//! Display transform between on-screen pixels and original-image pixels.
//!
//! Captured frames are usually shown smaller than their full resolution.
//! This module owns the single place that display scaling is applied: input
//! events convert display→image before reaching the drawing session, and the
//! renderer converts image→display when drawing. Stored geometry and the
//! calibration factor only ever see original-image pixel space, so the
//! correction cannot be applied twice.

use std::fmt;
use thiserror::Error;

use crate::model::Point;

/// Viewport construction/update error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// A resolution dimension was zero or negative
    #[error("Invalid {what} resolution: {width}x{height}")]
    InvalidResolution {
        /// Which resolution was rejected ("image" or "display").
        what: &'static str,
        width: f64,
        height: f64,
    },
}

/// Maps between display space and original-image pixel space.
///
/// The image is assumed to be shown aspect-preserving (letterboxed when the
/// display aspect differs), so a single uniform scale applies to both axes:
///
/// ```text
/// scale   = min(display_width / image_width, display_height / image_height)
/// image   = display / scale
/// display = image * scale
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    image_width: f64,
    image_height: f64,
    display_width: f64,
    display_height: f64,
}

impl Viewport {
    /// Create a viewport from the resolution provider's current values.
    pub fn new(
        image_width: f64,
        image_height: f64,
        display_width: f64,
        display_height: f64,
    ) -> Result<Self, ViewportError> {
        validate("image", image_width, image_height)?;
        validate("display", display_width, display_height)?;
        Ok(Self {
            image_width,
            image_height,
            display_width,
            display_height,
        })
    }

    /// Update the displayed size (window resize).
    pub fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        validate("display", width, height)?;
        self.display_width = width;
        self.display_height = height;
        Ok(())
    }

    /// Update the source image size (new capture loaded).
    pub fn set_image_size(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        validate("image", width, height)?;
        self.image_width = width;
        self.image_height = height;
        Ok(())
    }

    pub fn image_width(&self) -> f64 {
        self.image_width
    }

    pub fn image_height(&self) -> f64 {
        self.image_height
    }

    /// Ratio between on-screen rendered size and original-image pixel size.
    pub fn display_scale(&self) -> f64 {
        (self.display_width / self.image_width).min(self.display_height / self.image_height)
    }

    /// Convert a display-space point into original-image pixel space.
    pub fn display_to_image(&self, p: &Point) -> Point {
        let scale = self.display_scale();
        Point::new(p.x / scale, p.y / scale)
    }

    /// Convert an original-image-space point into display space.
    pub fn image_to_display(&self, p: &Point) -> Point {
        let scale = self.display_scale();
        Point::new(p.x * scale, p.y * scale)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} shown at {}x{} (scale {:.3})",
            self.image_width,
            self.image_height,
            self.display_width,
            self.display_height,
            self.display_scale()
        )
    }
}

fn validate(what: &'static str, width: f64, height: f64) -> Result<(), ViewportError> {
    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return Err(ViewportError::InvalidResolution {
            what,
            width,
            height,
        });
    }
    Ok(())
}
