//! Tonal transforms: contrast, grayscale and black-and-white.

use tracing::trace;

use crate::luminance::{luma_u8, THRESHOLD};
use crate::raster::{ChannelLayout, Raster};

/// Stretch or compress contrast around the midpoint 128.
///
/// Each color channel becomes `clip(round((v - 128) * factor + 128), 0, 255)`.
/// Alpha is carried through unchanged and the output layout equals the input
/// layout. On luma layouts the single luminance channel is adjusted.
///
/// A factor of exactly 1.0 returns an identical copy.
pub fn adjust_contrast(image: &Raster, factor: f32) -> Raster {
    if factor == 1.0 {
        return image.clone();
    }

    let channels = image.channels();
    let color = image.layout.color_channels();
    let mut output = image.clone();

    for chunk in output.pixels.chunks_exact_mut(channels) {
        for v in &mut chunk[..color] {
            let adjusted = (*v as f32 - 128.0) * factor + 128.0;
            *v = adjusted.round_ties_even().clamp(0.0, 255.0) as u8;
        }
    }

    trace!(factor, "adjusted contrast");
    output
}

/// Collapse a layout to its luma counterpart, keeping alpha if present.
fn luma_layout(layout: ChannelLayout) -> ChannelLayout {
    if layout.has_alpha() {
        ChannelLayout::LumaAlpha
    } else {
        ChannelLayout::Luma
    }
}

/// Map every pixel to a luma layout, transforming the luma value with `f`.
fn map_luma(image: &Raster, f: impl Fn(u8) -> u8) -> Raster {
    let channels = image.channels();
    let layout = luma_layout(image.layout);
    let mut pixels = Vec::with_capacity(image.pixel_count() * layout.channels());

    for chunk in image.pixels.chunks_exact(channels) {
        let y = if image.layout.is_luma() {
            chunk[0]
        } else {
            luma_u8(chunk[0], chunk[1], chunk[2])
        };
        pixels.push(f(y));
        if image.layout.has_alpha() {
            pixels.push(chunk[channels - 1]);
        }
    }

    Raster {
        width: image.width,
        height: image.height,
        layout,
        pixels,
    }
}

/// Convert a raster to Rec. 601 grayscale.
///
/// Luma rasters are returned unchanged. Color rasters become `Luma`, or
/// `LumaAlpha` when the source carries alpha.
pub fn to_grayscale(image: &Raster) -> Raster {
    if image.layout.is_luma() {
        return image.clone();
    }

    let output = map_luma(image, |y| y);
    trace!(layout = ?output.layout, "converted to grayscale");
    output
}

/// Threshold a raster at luma 128: `>= 128` becomes 255, anything else 0.
///
/// Alpha is preserved; the output is `Luma` or `LumaAlpha`.
pub fn to_black_and_white(image: &Raster) -> Raster {
    let output = map_luma(image, |y| if y >= THRESHOLD { 255 } else { 0 });
    trace!(layout = ?output.layout, "converted to black and white");
    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
