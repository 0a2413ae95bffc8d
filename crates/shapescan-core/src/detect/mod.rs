//! Dominant-shape detection.
//!
//! Detection runs a fixed pipeline over a raster, creating every
//! intermediate structure fresh for each call:
//!
//! 1. [`ForegroundMask`] - binarize at luma 128 and choose the foreground side
//! 2. [`largest_component`] - 4-connected flood fill, keep the biggest region
//! 3. [`convex_hull`] - monotone chain over the region's pixel coordinates
//! 4. [`simplify_hull`] - Ramer-Douglas-Peucker with a perimeter-scaled tolerance
//! 5. [`classify`] - vertex count, side/angle statistics, then circularity
//!
//! Only the single largest region is analysed.
//!
//! # Examples
//!
//! ```ignore
//! use shapescan_core::detect::{detect_shape, DetectionOptions};
//!
//! let result = detect_shape(&raster, &DetectionOptions::default());
//! println!("{} covering {} px", result.shape, result.area_px);
//! ```

mod classify;
mod component;
mod geometry;
mod hull;
mod mask;
mod simplify;
mod types;

pub use classify::{circularity, classify, QuadMetrics};
pub use component::{largest_component, Component};
pub use geometry::{angle_at, perimeter, perpendicular_distance, shoelace_area, Pixel, Point};
pub use hull::convex_hull;
pub use mask::ForegroundMask;
pub use simplify::{epsilon_for, simplify, simplify_hull};
pub use types::{
    DetectionOptions, DetectionResult, ForegroundMode, ShapeKind, DEFAULT_MIN_COMPONENT_AREA,
};

use tracing::debug;

use crate::raster::Raster;

/// Detect the shape and area of the largest foreground blob in `raster`.
///
/// Degenerate input is not an error: an empty raster, an all-background
/// mask, or a largest component below `min_component_area` all yield shape
/// `none` with `area_px` 0. A component whose hull has fewer than three
/// vertices yields `none` with `area_px` set to the component size.
pub fn detect_shape(raster: &Raster, options: &DetectionOptions) -> DetectionResult {
    if raster.is_empty() {
        debug!("empty raster, nothing to detect");
        return DetectionResult::none(0);
    }

    let mask = ForegroundMask::from_raster(raster, options.foreground);
    if mask.is_empty() {
        debug!("mask has no foreground pixels");
        return DetectionResult::none(0);
    }

    let Some(component) = largest_component(&mask) else {
        return DetectionResult::none(0);
    };

    let area_px = component.len();
    if area_px < options.min_component_area {
        debug!(
            area_px,
            min_component_area = options.min_component_area,
            "largest component treated as noise"
        );
        return DetectionResult::none(0);
    }

    let hull: Vec<Point> = convex_hull(&component.pixels)
        .into_iter()
        .map(Point::from)
        .collect();
    if hull.len() < 3 {
        debug!(area_px, hull = hull.len(), "hull is not a polygon");
        return DetectionResult::none(area_px);
    }

    let polygon = simplify_hull(&hull);
    let area_geom = shoelace_area(&polygon);
    let pixel_perimeter = component.pixel_perimeter();
    let shape = classify(&polygon, pixel_perimeter, area_px);

    debug!(
        %shape,
        area_px,
        area_geom,
        hull = hull.len(),
        vertices = polygon.len(),
        foreground = mask.count(),
        pixel_perimeter,
        "classified largest component"
    );

    DetectionResult {
        shape,
        area_px,
        area_geom,
    }
}
