//! Ramer-Douglas-Peucker polyline simplification.

use super::geometry::{perimeter, perpendicular_distance, Point};

/// Tolerance relative to the hull perimeter.
const EPSILON_FRACTION: f64 = 0.01;

/// Smallest tolerance in pixels.
const MIN_EPSILON: f64 = 1.0;

/// Simplification tolerance for a closed polygon: `max(1, 1% of perimeter)`.
pub fn epsilon_for(poly: &[Point]) -> f64 {
    (perimeter(poly) * EPSILON_FRACTION).max(MIN_EPSILON)
}

/// Simplify an open polyline, keeping both endpoints.
///
/// A span whose interior points all lie within `epsilon` of the chord between
/// its endpoints collapses to those endpoints. Otherwise it is split at the
/// farthest point (the first one on ties) and both halves are processed.
/// Spans are kept on an explicit stack, so depth is bounded by memory rather
/// than the call stack.
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut spans = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = spans.pop() {
        let (a, b) = (points[start], points[end]);

        let mut max_dist = 0.0;
        let mut split = start;
        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let d = perpendicular_distance(p, a, b);
            if d > max_dist {
                max_dist = d;
                split = i;
            }
        }

        if max_dist > epsilon {
            keep[split] = true;
            spans.push((start, split));
            spans.push((split, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}

/// Simplify a convex hull, falling back to the hull itself when fewer than
/// three vertices would survive.
pub fn simplify_hull(hull: &[Point]) -> Vec<Point> {
    let simplified = simplify(hull, epsilon_for(hull));
    if simplified.len() < 3 {
        hull.to_vec()
    } else {
        simplified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_straight_line_collapses() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, -0.1), (3.0, 0.0)]);
        assert_eq!(simplify(&line, 1.0), pts(&[(0.0, 0.0), (3.0, 0.0)]));
    }

    #[test]
    fn test_corner_is_kept() {
        let poly = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 5.0), (10.0, 10.0)]);
        assert_eq!(
            simplify(&poly, 1.0),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
        );
    }

    #[test]
    fn test_short_input_untouched() {
        let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(simplify(&two, 5.0), two);
    }

    #[test]
    fn test_point_at_tolerance_is_dropped() {
        let poly = pts(&[(0.0, 0.0), (5.0, 1.0), (10.0, 0.0)]);
        assert_eq!(simplify(&poly, 1.0).len(), 2);
        assert_eq!(simplify(&poly, 0.99).len(), 3);
    }

    #[test]
    fn test_never_grows() {
        let zigzag: Vec<Point> = (0..50)
            .map(|i| Point::new(i as f64, if i % 2 == 0 { 0.0 } else { 3.0 }))
            .collect();
        let out = simplify(&zigzag, 0.5);
        assert!(out.len() <= zigzag.len());
        assert_eq!(out.first(), zigzag.first());
        assert_eq!(out.last(), zigzag.last());
    }

    #[test]
    fn test_epsilon_scales_with_perimeter() {
        let small = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_eq!(epsilon_for(&small), 1.0);

        let large = pts(&[(0.0, 0.0), (500.0, 0.0), (500.0, 500.0), (0.0, 500.0)]);
        assert!((epsilon_for(&large) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_simplify_hull_falls_back() {
        // A sliver whose middle vertex is within tolerance of the chord
        let sliver = pts(&[(0.0, 0.0), (50.0, 0.5), (100.0, 0.0)]);
        assert_eq!(simplify_hull(&sliver), sliver);
    }
}
