//! Point types and polygon measurements shared by the detection stages.

use serde::{Deserialize, Serialize};

/// Lengths and products below this are treated as zero.
pub(crate) const GEOM_EPSILON: f64 = 1e-6;

/// Integer pixel coordinate. Orders lexicographically by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pixel {
    pub x: i64,
    pub y: i64,
}

impl Pixel {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Floating point coordinate used once geometry leaves the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

/// Closed-polygon perimeter. Fewer than two points have zero perimeter.
pub fn perimeter(poly: &[Point]) -> f64 {
    if poly.len() < 2 {
        return 0.0;
    }
    let n = poly.len();
    (0..n).map(|i| poly[i].distance(poly[(i + 1) % n])).sum()
}

/// Unsigned shoelace area. Fewer than three points have zero area.
pub fn shoelace_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let n = poly.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (poly[i], poly[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() * 0.5
}

/// Interior angle at `b` formed by `a-b-c`, in degrees.
///
/// Returns 0 when either edge has zero length.
pub fn angle_at(a: Point, b: Point, c: Point) -> f64 {
    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);

    let la = bax.hypot(bay);
    let lc = bcx.hypot(bcy);
    if la * lc < GEOM_EPSILON {
        return 0.0;
    }

    let cos = ((bax * bcx + bay * bcy) / (la * lc)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Returns 0 when `a` and `b` coincide.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let den = dx.hypot(dy);
    if den < GEOM_EPSILON {
        return 0.0;
    }
    (dy * p.x - dx * p.y + b.x * a.y - b.y * a.x).abs() / den
}
