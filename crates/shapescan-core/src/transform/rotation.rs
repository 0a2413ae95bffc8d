//! Nearest-neighbor rotation on a fixed canvas.
//!
//! The rotation uses inverse mapping: for each destination pixel, its offset
//! from the image center is rotated by `-θ` and rounded to the nearest source
//! pixel.
//!
//! ```text
//! src_x =  cos(θ) * (dst_x - cx) + sin(θ) * (dst_y - cy) + cx
//! src_y = -sin(θ) * (dst_x - cx) + cos(θ) * (dst_y - cy) + cy
//! ```
//!
//! The output keeps the input's dimensions and channel layout. Destination
//! pixels whose source falls outside the image are zero (black, and fully
//! transparent when the layout has alpha).

use tracing::trace;

use crate::raster::Raster;

/// Cosine and sine of an angle already normalised into `[0, 360)`.
///
/// Quarter turns are exact so that they permute pixels without rounding drift.
fn unit_rotation(angle: f64) -> (f64, f64) {
    if angle == 90.0 {
        (0.0, 1.0)
    } else if angle == 180.0 {
        (-1.0, 0.0)
    } else if angle == 270.0 {
        (0.0, -1.0)
    } else {
        let rad = angle.to_radians();
        (rad.cos(), rad.sin())
    }
}

/// Rotate a raster around its center.
///
/// # Arguments
///
/// * `image` - Source raster
/// * `angle_degrees` - Rotation angle in degrees; angles are taken modulo 360
///
/// # Returns
///
/// New `Raster` with the same dimensions and layout as the source. Content
/// rotated past the canvas edges is clipped.
pub fn rotate(image: &Raster, angle_degrees: f64) -> Raster {
    let angle = angle_degrees.rem_euclid(360.0);

    // Fast path: no rotation needed
    if image.is_empty() || angle == 0.0 {
        return image.clone();
    }

    let (cos, sin) = unit_rotation(angle);
    let (w, h) = (image.width, image.height);
    let cx = (w as f64 - 1.0) / 2.0;
    let cy = (h as f64 - 1.0) / 2.0;
    let channels = image.channels();

    let mut output = Raster::blank(w, h, image.layout);

    for dst_y in 0..h {
        let yo = dst_y as f64 - cy;
        for dst_x in 0..w {
            let xo = dst_x as f64 - cx;

            let src_x = (cos * xo + sin * yo + cx).round_ties_even();
            let src_y = (-sin * xo + cos * yo + cy).round_ties_even();

            if src_x < 0.0 || src_y < 0.0 || src_x >= w as f64 || src_y >= h as f64 {
                continue;
            }

            let src_idx = image.offset(src_x as u32, src_y as u32);
            let dst_idx = output.offset(dst_x, dst_y);
            output.pixels[dst_idx..dst_idx + channels]
                .copy_from_slice(&image.pixels[src_idx..src_idx + channels]);
        }
    }

    trace!(angle, width = w, height = h, "rotated raster");
    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
