//! Editing session: a source raster plus the transform parameters applied to it.
//!
//! The session owns its source raster and never mutates it. Rendering always
//! starts from the source, so parameters can be changed in any order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detect::{detect_shape, DetectionOptions, DetectionResult};
use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::transform::{adjust_contrast, resize, rotate, to_black_and_white, to_grayscale};

/// Final tonal conversion applied by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneMode {
    /// Keep the source colors.
    #[default]
    Color,
    Grayscale,
    BlackAndWhite,
}

/// Transform parameters of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditParams {
    /// Rotation in degrees, normalised into `[0, 360)`.
    pub angle_degrees: f64,
    /// Bounding box to resize into, if any.
    pub fit: Option<(u32, u32)>,
    /// Contrast factor; 1.0 leaves the image unchanged.
    pub contrast: f32,
    pub tone: ToneMode,
}

impl Default for EditParams {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            fit: None,
            contrast: 1.0,
            tone: ToneMode::Color,
        }
    }
}

impl EditParams {
    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A raster under edit.
#[derive(Debug, Clone)]
pub struct EditSession {
    source: Raster,
    params: EditParams,
}

impl EditSession {
    /// Start a session on `source` with default parameters.
    pub fn new(source: Raster) -> Self {
        Self {
            source,
            params: EditParams::default(),
        }
    }

    pub fn source(&self) -> &Raster {
        &self.source
    }

    pub fn params(&self) -> &EditParams {
        &self.params
    }

    /// Set the absolute rotation angle.
    pub fn set_angle(&mut self, angle_degrees: f64) -> Result<()> {
        if !angle_degrees.is_finite() {
            return Err(Error::invalid_parameter(format!(
                "rotation angle must be finite, got {}",
                angle_degrees
            )));
        }
        self.params.angle_degrees = angle_degrees.rem_euclid(360.0);
        Ok(())
    }

    /// Add `delta_degrees` to the current rotation angle.
    pub fn rotate_by(&mut self, delta_degrees: f64) -> Result<()> {
        self.set_angle(self.params.angle_degrees + delta_degrees)
    }

    /// Resize into `max_width x max_height` when rendering.
    pub fn set_fit(&mut self, max_width: u32, max_height: u32) -> Result<()> {
        if max_width == 0 || max_height == 0 {
            return Err(Error::invalid_parameter(format!(
                "resize target must be positive, got {}x{}",
                max_width, max_height
            )));
        }
        self.params.fit = Some((max_width, max_height));
        Ok(())
    }

    /// Render at the source size.
    pub fn clear_fit(&mut self) {
        self.params.fit = None;
    }

    /// Set the contrast factor.
    pub fn set_contrast(&mut self, factor: f32) -> Result<()> {
        if !factor.is_finite() {
            return Err(Error::invalid_parameter(format!(
                "contrast factor must be finite, got {}",
                factor
            )));
        }
        self.params.contrast = factor;
        Ok(())
    }

    pub fn set_tone(&mut self, tone: ToneMode) {
        self.params.tone = tone;
    }

    /// Restore default parameters; the source is kept.
    pub fn reset(&mut self) {
        self.params = EditParams::default();
    }

    /// Apply rotation, resize, contrast and tone, in that order.
    pub fn render(&self) -> Result<Raster> {
        if self.params.is_default() {
            return Ok(self.source.clone());
        }

        let p = &self.params;
        let mut out = rotate(&self.source, p.angle_degrees);
        if let Some((max_w, max_h)) = p.fit {
            out = resize(&out, max_w, max_h)?;
        }
        out = adjust_contrast(&out, p.contrast);
        out = match p.tone {
            ToneMode::Color => out,
            ToneMode::Grayscale => to_grayscale(&out),
            ToneMode::BlackAndWhite => to_black_and_white(&out),
        };

        debug!(
            angle = p.angle_degrees,
            fit = ?p.fit,
            contrast = p.contrast,
            tone = ?p.tone,
            width = out.width,
            height = out.height,
            "rendered session"
        );
        Ok(out)
    }

    /// Render, then detect the dominant shape in the result.
    pub fn detect(&self, options: &DetectionOptions) -> Result<DetectionResult> {
        let rendered = self.render()?;
        Ok(detect_shape(&rendered, options))
    }
}
