//! Shape classification from a simplified hull polygon.
//!
//! ## Decision Order
//! 1. Three vertices are a triangle.
//! 2. Four vertices are tested for square, rectangle, and degenerate triangle.
//! 3. Anything unresolved falls back to circularity.

use std::f64::consts::PI;

use super::geometry::{angle_at, shoelace_area, Point, GEOM_EPSILON};
use super::types::ShapeKind;

/// Largest `max_side / min_side` for a square.
const SQUARE_SIDE_RATIO: f64 = 1.15;
/// Mean deviation from 90° below which a quad is a square.
const SQUARE_ANGLE_DEVIATION: f64 = 15.0;
/// Mean deviation from 90° below which a quad is a rectangle.
const RECTANGLE_ANGLE_DEVIATION: f64 = 25.0;
/// A quad vertex wider than this is treated as lying on an edge.
const COLLINEAR_ANGLE: f64 = 160.0;
/// Relative tolerance when comparing a quad with one of its triangles.
const TRIANGLE_AREA_REL_TOL: f64 = 0.08;
/// Absolute tolerance (square pixels) for the same comparison.
const TRIANGLE_AREA_ABS_TOL: f64 = 2.0;
/// Below this circularity a quad is an elongated triangle.
const LOW_CIRCULARITY: f64 = 0.65;
/// Above this circularity a blob is a circle.
const CIRCLE_CIRCULARITY: f64 = 0.70;

/// Side and angle statistics of a four-vertex polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadMetrics {
    pub sides: [f64; 4],
    /// Interior angles in degrees, one per vertex.
    pub angles: [f64; 4],
    /// `max_side / min_side`; infinite when a side has zero length.
    pub side_ratio: f64,
    /// Mean of `|angle - 90°|`.
    pub angle_deviation: f64,
}

impl QuadMetrics {
    pub fn new(quad: &[Point; 4]) -> Self {
        let sides: [f64; 4] = std::array::from_fn(|i| quad[i].distance(quad[(i + 1) % 4]));
        let angles: [f64; 4] =
            std::array::from_fn(|i| angle_at(quad[(i + 3) % 4], quad[i], quad[(i + 1) % 4]));

        let min_side = sides.iter().copied().fold(f64::INFINITY, f64::min);
        let max_side = sides.iter().copied().fold(0.0, f64::max);
        let side_ratio = if min_side > GEOM_EPSILON {
            max_side / min_side
        } else {
            f64::INFINITY
        };
        let angle_deviation = angles.iter().map(|a| (a - 90.0).abs()).sum::<f64>() / 4.0;

        Self {
            sides,
            angles,
            side_ratio,
            angle_deviation,
        }
    }
}

/// Polsby-Popper compactness `4π·area / perimeter²`; 1.0 for a perfect disc.
///
/// Returns `None` for a zero perimeter.
pub fn circularity(pixel_area: usize, pixel_perimeter: usize) -> Option<f64> {
    let p = pixel_perimeter as f64;
    if p < GEOM_EPSILON {
        return None;
    }
    Some(4.0 * PI * pixel_area as f64 / (p * p))
}

/// Classify a quad on its own geometry. `None` means unresolved.
fn classify_quad(quad: &[Point; 4]) -> Option<ShapeKind> {
    let m = QuadMetrics::new(quad);

    if m.side_ratio <= SQUARE_SIDE_RATIO && m.angle_deviation < SQUARE_ANGLE_DEVIATION {
        return Some(ShapeKind::Square);
    }
    if m.angle_deviation < RECTANGLE_ANGLE_DEVIATION {
        return Some(ShapeKind::Rectangle);
    }
    if m.angles.iter().any(|&a| a > COLLINEAR_ANGLE) {
        return Some(ShapeKind::Triangle);
    }

    // One spurious vertex: dropping it barely changes the area
    let full = shoelace_area(quad);
    let tolerance = (TRIANGLE_AREA_REL_TOL * full).max(TRIANGLE_AREA_ABS_TOL);
    let near_triangle = (0..4).any(|skip| {
        let tri: Vec<Point> = (0..4).filter(|&i| i != skip).map(|i| quad[i]).collect();
        (full - shoelace_area(&tri)).abs() <= tolerance
    });

    near_triangle.then_some(ShapeKind::Triangle)
}

/// Label a simplified polygon.
///
/// # Arguments
/// * `polygon` - Simplified hull vertices
/// * `pixel_perimeter` - Boundary pixel count of the component
/// * `pixel_area` - Pixel count of the component
pub fn classify(polygon: &[Point], pixel_perimeter: usize, pixel_area: usize) -> ShapeKind {
    let n = polygon.len();

    if n == 3 {
        return ShapeKind::Triangle;
    }

    if let Ok(quad) = <&[Point; 4]>::try_from(polygon) {
        if let Some(kind) = classify_quad(quad) {
            return kind;
        }
    }

    let Some(c) = circularity(pixel_area, pixel_perimeter) else {
        return ShapeKind::None;
    };

    if n != 4 {
        return ShapeKind::Circle;
    }
    if c < LOW_CIRCULARITY {
        return ShapeKind::Triangle;
    }
    if c > CIRCLE_CIRCULARITY {
        return ShapeKind::Circle;
    }

    ShapeKind::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(coords: [(f64, f64); 4]) -> [Point; 4] {
        coords.map(|(x, y)| Point::new(x, y))
    }

    #[test]
    fn test_three_vertices_is_triangle() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        assert_eq!(classify(&tri, 40, 50), ShapeKind::Triangle);
    }

    #[test]
    fn test_square() {
        let q = quad([(0.0, 0.0), (49.0, 0.0), (49.0, 49.0), (0.0, 49.0)]);
        let m = QuadMetrics::new(&q);
        assert!((m.side_ratio - 1.0).abs() < 1e-9);
        assert!(m.angle_deviation < 1e-9);
        assert_eq!(classify(&q, 200, 2500), ShapeKind::Square);
    }

    #[test]
    fn test_slightly_uneven_square() {
        let q = quad([(0.0, 0.0), (54.0, 0.0), (54.0, 50.0), (0.0, 50.0)]);
        assert_eq!(classify(&q, 208, 2750), ShapeKind::Square);
    }

    #[test]
    fn test_rectangle() {
        let q = quad([(0.0, 0.0), (80.0, 0.0), (80.0, 30.0), (0.0, 30.0)]);
        assert_eq!(classify(&q, 220, 2400), ShapeKind::Rectangle);
    }

    #[test]
    fn test_quad_with_flat_vertex_is_triangle() {
        // The vertex at (50, 2) sits almost on the edge from (0, 0) to (100, 0)
        let q = quad([(0.0, 0.0), (50.0, 2.0), (100.0, 0.0), (0.0, 80.0)]);
        let m = QuadMetrics::new(&q);
        assert!(m.angles.iter().any(|&a| a > COLLINEAR_ANGLE));
        assert_eq!(classify(&q, 400, 4000), ShapeKind::Triangle);
    }

    #[test]
    fn test_quad_near_triangle_by_area() {
        // Kite-like quad whose fourth vertex adds little area but bends under 160°
        let q = quad([(0.0, 0.0), (100.0, 0.0), (4.0, 96.0), (0.0, 90.0)]);
        let m = QuadMetrics::new(&q);
        assert!(m.angles.iter().all(|&a| a <= COLLINEAR_ANGLE));
        assert!(m.angle_deviation >= RECTANGLE_ANGLE_DEVIATION);
        assert_eq!(classify(&q, 400, 4000), ShapeKind::Triangle);
    }

    #[test]
    fn test_unresolved_quad_uses_circularity() {
        // Rhombus with 60° and 120° angles: no quad rule matches
        let h = 50.0 * 3f64.sqrt();
        let q = quad([(0.0, 0.0), (h, 50.0), (0.0, 100.0), (-h, 50.0)]);
        assert_eq!(classify_quad(&q), None);

        // Compact blob reads as a circle
        assert_eq!(classify(&q, 100, 800), ShapeKind::Circle);
        // Elongated blob reads as a triangle
        assert_eq!(classify(&q, 400, 4000), ShapeKind::Triangle);
        // In between stays unclassified
        let area = (0.68 * 400.0 * 400.0 / (4.0 * PI)) as usize;
        assert_eq!(classify(&q, 400, area), ShapeKind::None);
    }

    #[test]
    fn test_many_vertices_is_circle() {
        let poly: Vec<Point> = (0..9)
            .map(|i| {
                let t = i as f64 * 2.0 * PI / 9.0;
                Point::new(30.0 * t.cos(), 30.0 * t.sin())
            })
            .collect();
        assert_eq!(classify(&poly, 240, 2827), ShapeKind::Circle);
    }

    #[test]
    fn test_zero_perimeter_is_none() {
        let poly: Vec<Point> = (0..6).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
        assert_eq!(classify(&poly, 0, 0), ShapeKind::None);
    }

    #[test]
    fn test_degenerate_quad_side_ratio() {
        let q = quad([(0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(QuadMetrics::new(&q).side_ratio.is_infinite());
    }

    #[test]
    fn test_circularity() {
        assert!(circularity(10, 0).is_none());
        // Disc of radius 30: 4π·πr² / (2πr)² = 1
        let r = 30.0f64;
        let c = circularity((PI * r * r) as usize, (2.0 * PI * r) as usize).unwrap();
        assert!((c - 1.0).abs() < 0.05);
    }
}
