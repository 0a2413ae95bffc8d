//! Monotone-chain convex hull over pixel coordinates.

use super::geometry::Pixel;

/// Z component of `(a - o) x (b - o)`; positive for a left turn.
#[inline]
fn cross(o: Pixel, a: Pixel, b: Pixel) -> i64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Push `p` onto a chain, first popping every point that would not make a
/// strict left turn. Collinear points are dropped.
fn extend_chain(chain: &mut Vec<Pixel>, p: Pixel) {
    while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0 {
        chain.pop();
    }
    chain.push(p);
}

/// Convex hull of a point set in counter-clockwise order (in a y-up frame).
///
/// Duplicates are removed and the input order is irrelevant. Point sets with
/// two or fewer distinct points are returned sorted; a result with fewer than
/// three points is not a usable polygon.
pub fn convex_hull(points: &[Pixel]) -> Vec<Pixel> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();

    if pts.len() <= 2 {
        return pts;
    }

    let mut lower = Vec::with_capacity(pts.len());
    for &p in &pts {
        extend_chain(&mut lower, p);
    }

    let mut upper = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        extend_chain(&mut upper, p);
    }

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}


// ============================================================================
// Property-Based Tests
// ============================================================================
