//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Grayscale conversion, black-and-white thresholding and the detection mask
//! all derive luma through this module so they agree pixel for pixel.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Midpoint used by every binary threshold in the crate.
pub const THRESHOLD: u8 = 128;

/// Calculate luma from u8 RGB values, rounded and clamped to 0-255.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}
