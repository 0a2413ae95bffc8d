//! Aspect-preserving nearest-neighbor resize.
//!
//! All functions return new `Raster` instances without modifying the input.

use tracing::trace;

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Calculate dimensions that fit within `max_width x max_height` while
/// preserving aspect ratio.
///
/// The scale factor is `min(max_width / width, max_height / height)`, so
/// images smaller than the box are scaled up. Each axis is at least 1.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }

    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let new_width = (width as f64 * scale).round_ties_even() as u32;
    let new_height = (height as f64 * scale).round_ties_even() as u32;

    (
        new_width.clamp(1, max_width.max(1)),
        new_height.clamp(1, max_height.max(1)),
    )
}

/// Nearest source index for each destination index along one axis.
///
/// Destination pixel centers map to `(i + 0.5) * (src / dst) - 0.5`.
fn source_indices(src: u32, dst: u32) -> Vec<u32> {
    let ratio = src as f64 / dst as f64;
    let last = (src - 1) as f64;
    (0..dst)
        .map(|i| {
            let s = ((i as f64 + 0.5) * ratio - 0.5).round_ties_even();
            s.clamp(0.0, last) as u32
        })
        .collect()
}

/// Resize a raster to fit within a bounding box, preserving aspect ratio.
///
/// # Arguments
///
/// * `image` - The source raster
/// * `max_width` - Maximum output width in pixels
/// * `max_height` - Maximum output height in pixels
///
/// # Returns
///
/// A new `Raster` with the same channel layout as the source. A zero-area
/// source yields a blank 1x1 raster.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if either maximum is zero.
pub fn resize(image: &Raster, max_width: u32, max_height: u32) -> Result<Raster> {
    if max_width == 0 || max_height == 0 {
        return Err(Error::invalid_parameter(format!(
            "resize target must be positive, got {}x{}",
            max_width, max_height
        )));
    }

    if image.is_empty() {
        return Ok(Raster::blank(1, 1, image.layout));
    }

    let (dst_w, dst_h) = fit_dimensions(image.width, image.height, max_width, max_height);

    // Fast path: if dimensions match, just clone
    if dst_w == image.width && dst_h == image.height {
        return Ok(image.clone());
    }

    let cols = source_indices(image.width, dst_w);
    let rows = source_indices(image.height, dst_h);
    let channels = image.channels();

    let mut pixels = Vec::with_capacity(dst_w as usize * dst_h as usize * channels);
    for &sy in &rows {
        for &sx in &cols {
            pixels.extend_from_slice(image.pixel(sx, sy));
        }
    }

    trace!(
        src_width = image.width,
        src_height = image.height,
        dst_width = dst_w,
        dst_height = dst_h,
        "resized raster"
    );

    Ok(Raster {
        width: dst_w,
        height: dst_h,
        layout: image.layout,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::ChannelLayout;

    fn create_test_image(width: u32, height: u32, layout: ChannelLayout) -> Raster {
        let channels = layout.channels();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    pixels.push(((x * 7 + y * 13 + c as u32 * 31) % 256) as u8);
                }
            }
        }
        Raster::new(width, height, layout, pixels).unwrap()
    }

    #[test]
    fn test_resize_downscale_landscape() {
        let img = create_test_image(100, 50, ChannelLayout::Rgb);
        let resized = resize(&img, 50, 50).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(10, 5, ChannelLayout::Luma);
        let resized = resize(&img, 40, 40).unwrap();

        assert_eq!(resized.width, 40);
        assert_eq!(resized.height, 20);
    }

    #[test]
    fn test_resize_exact_doubling_replicates_pixels() {
        let img = Raster::new(2, 1, ChannelLayout::Luma, vec![10, 200]).unwrap();
        let resized = resize(&img, 4, 2).unwrap();

        assert_eq!(resized.pixels, vec![10, 10, 200, 200, 10, 10, 200, 200]);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50, ChannelLayout::Rgba);
        let resized = resize(&img, 100, 50).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_preserves_layout() {
        for layout in [
            ChannelLayout::Luma,
            ChannelLayout::LumaAlpha,
            ChannelLayout::Rgb,
            ChannelLayout::Rgba,
        ] {
            let img = create_test_image(30, 20, layout);
            let resized = resize(&img, 15, 15).unwrap();
            assert_eq!(resized.layout, layout);
            assert_eq!(resized.byte_size(), 15 * 10 * layout.channels());
        }
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50, ChannelLayout::Rgb);

        assert!(matches!(resize(&img, 0, 50), Err(Error::InvalidParameter(_))));
        assert!(matches!(resize(&img, 50, 0), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_resize_empty_source() {
        let img = Raster::blank(0, 0, ChannelLayout::LumaAlpha);
        let resized = resize(&img, 10, 10).unwrap();
        assert_eq!(resized.width, 1);
        assert_eq!(resized.height, 1);
        assert_eq!(resized.layout, ChannelLayout::LumaAlpha);
    }

    #[test]
    fn test_fit_dimensions_never_zero() {
        assert_eq!(fit_dimensions(1000, 1, 10, 10), (10, 1));
        assert_eq!(fit_dimensions(1, 1000, 10, 10), (1, 10));
    }

    #[test]
    fn test_fit_dimensions_portrait() {
        assert_eq!(fit_dimensions(4000, 6000, 2560, 2560), (1707, 2560));
    }

    #[test]
    fn test_source_indices_clamped() {
        let idx = source_indices(3, 7);
        assert_eq!(idx.len(), 7);
        assert!(idx.iter().all(|&i| i <= 2));
        assert_eq!(idx[0], 0);
        assert_eq!(idx[6], 2);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
