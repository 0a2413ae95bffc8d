//! Core raster value type.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::luminance::luma_u8;

/// Channel layout of a raster's interleaved pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    /// Single luminance channel.
    Luma,
    /// Luminance followed by alpha.
    LumaAlpha,
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::LumaAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Returns true if the last channel is alpha.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::LumaAlpha | ChannelLayout::Rgba)
    }

    /// Returns true for the single-luminance layouts (with or without alpha).
    #[inline]
    pub fn is_luma(self) -> bool {
        matches!(self, ChannelLayout::Luma | ChannelLayout::LumaAlpha)
    }

    /// Number of color (non-alpha) channels.
    #[inline]
    pub fn color_channels(self) -> usize {
        if self.has_alpha() {
            self.channels() - 1
        } else {
            self.channels()
        }
    }

    /// Layout for a given channel count (1 to 4).
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(ChannelLayout::Luma),
            2 => Ok(ChannelLayout::LumaAlpha),
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            n => Err(Error::invalid_parameter(format!(
                "channel count must be between 1 and 4, got {}",
                n
            ))),
        }
    }
}

/// An immutable pixel grid.
///
/// Every transform returns a new `Raster`; none of them mutate their input.
/// Fields are only reachable through accessors outside this crate, so the
/// buffer length always matches the dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub(crate) width: u32,
    /// Height in pixels.
    pub(crate) height: u32,
    /// Channel layout of `pixels`.
    pub(crate) layout: ChannelLayout,
    /// Interleaved pixel data in row-major order.
    /// Length is `width * height * layout.channels()`.
    pub(crate) pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster, validating the buffer length against the dimensions.
    pub fn new(width: u32, height: u32, layout: ChannelLayout, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Create a raster with every byte set to zero (black, fully transparent).
    pub fn blank(width: u32, height: u32, layout: ChannelLayout) -> Self {
        Self {
            width,
            height,
            layout,
            pixels: vec![0u8; width as usize * height as usize * layout.channels()],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Interleaved pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// The channel values of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.offset(x, y);
        &self.pixels[idx..idx + self.channels()]
    }

    /// Rec. 601 luma of the pixel at `(x, y)`; alpha is ignored.
    #[inline]
    pub fn luma_at(&self, x: u32, y: u32) -> u8 {
        let px = self.pixel(x, y);
        if self.layout.is_luma() {
            px[0]
        } else {
            luma_u8(px[0], px[1], px[2])
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Build a raster from a decoded image, keeping its channel layout.
    ///
    /// 16-bit and floating point images are normalised to 8-bit RGBA.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (layout, pixels) = match img {
            DynamicImage::ImageLuma8(buf) => (ChannelLayout::Luma, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (ChannelLayout::LumaAlpha, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ChannelLayout::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ChannelLayout::Rgba, buf.into_raw()),
            other => (ChannelLayout::Rgba, other.into_rgba8().into_raw()),
        };
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Convert to an `image::DynamicImage` for display or further processing.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        let (w, h, buf) = (self.width, self.height, self.pixels.clone());
        match self.layout {
            ChannelLayout::Luma => {
                image::GrayImage::from_raw(w, h, buf).map(DynamicImage::ImageLuma8)
            }
            ChannelLayout::LumaAlpha => {
                image::GrayAlphaImage::from_raw(w, h, buf).map(DynamicImage::ImageLumaA8)
            }
            ChannelLayout::Rgb => {
                image::RgbImage::from_raw(w, h, buf).map(DynamicImage::ImageRgb8)
            }
            ChannelLayout::Rgba => {
                image::RgbaImage::from_raw(w, h, buf).map(DynamicImage::ImageRgba8)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_channels() {
        assert_eq!(ChannelLayout::Luma.channels(), 1);
        assert_eq!(ChannelLayout::LumaAlpha.channels(), 2);
        assert_eq!(ChannelLayout::Rgb.channels(), 3);
        assert_eq!(ChannelLayout::Rgba.channels(), 4);

        assert!(ChannelLayout::LumaAlpha.has_alpha());
        assert!(!ChannelLayout::Rgb.has_alpha());
        assert_eq!(ChannelLayout::Rgba.color_channels(), 3);
        assert_eq!(ChannelLayout::LumaAlpha.color_channels(), 1);
    }

    #[test]
    fn test_layout_from_channels() {
        for n in 1..=4 {
            assert_eq!(ChannelLayout::from_channels(n).unwrap().channels(), n);
        }
        assert!(ChannelLayout::from_channels(0).is_err());
        assert!(ChannelLayout::from_channels(5).is_err());
    }

    #[test]
    fn test_raster_creation() {
        let img = Raster::new(100, 50, ChannelLayout::Rgb, vec![0u8; 100 * 50 * 3]).unwrap();
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_raster_size_mismatch() {
        let err = Raster::new(2, 2, ChannelLayout::Rgba, vec![0u8; 12]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 16,
                actual: 12
            }
        ));
    }

    #[test]
    fn test_accessors_match_validated_buffer() {
        let pixels: Vec<u8> = (0..24).collect();
        let img = Raster::new(3, 2, ChannelLayout::Rgba, pixels.clone()).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.layout(), ChannelLayout::Rgba);
        assert_eq!(img.pixels(), pixels.as_slice());
        assert_eq!(
            img.pixels().len(),
            img.pixel_count() * img.layout().channels()
        );
        assert_eq!(img.into_pixels(), pixels);
    }

    #[test]
    fn test_raster_empty() {
        let img = Raster::blank(0, 10, ChannelLayout::Luma);
        assert!(img.is_empty());
        assert_eq!(img.byte_size(), 0);
    }

    #[test]
    fn test_pixel_access() {
        let img = Raster::new(2, 1, ChannelLayout::Rgb, vec![1, 2, 3, 255, 255, 255]).unwrap();
        assert_eq!(img.pixel(0, 0), &[1, 2, 3]);
        assert_eq!(img.luma_at(1, 0), 255);
        assert_eq!(img.luma_at(0, 0), 2);
    }

    #[test]
    fn test_dynamic_image_conversion_keeps_layout() {
        let img = Raster::new(2, 1, ChannelLayout::LumaAlpha, vec![10, 20, 30, 40]).unwrap();
        let dynamic = img.to_dynamic_image().unwrap();
        assert!(matches!(dynamic, DynamicImage::ImageLumaA8(_)));

        let back = Raster::from_dynamic_image(dynamic);
        assert_eq!(back, img);
    }

    #[test]
    fn test_wide_formats_normalise_to_rgba() {
        let wide = DynamicImage::ImageRgb16(image::ImageBuffer::new(3, 2));
        let img = Raster::from_dynamic_image(wide);
        assert_eq!(img.layout, ChannelLayout::Rgba);
        assert_eq!(img.byte_size(), 3 * 2 * 4);
    }
}
