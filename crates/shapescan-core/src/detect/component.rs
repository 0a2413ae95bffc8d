//! Largest 4-connected foreground component.

use std::collections::VecDeque;

use super::geometry::Pixel;
use super::mask::ForegroundMask;

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A maximal 4-connected set of foreground pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Pixels in breadth-first discovery order.
    pub pixels: Vec<Pixel>,
}

impl Component {
    /// Number of pixels in the component.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Count of boundary pixels: members with at least one 4-neighbor
    /// outside the component.
    ///
    /// Each pixel counts once, however many of its sides are exposed.
    pub fn pixel_perimeter(&self) -> usize {
        let Some((min_x, min_y, max_x, max_y)) = self.bounds() else {
            return 0;
        };

        // Membership grid padded by one pixel on every side.
        let w = (max_x - min_x + 3) as usize;
        let h = (max_y - min_y + 3) as usize;
        let mut inside = vec![false; w * h];
        let index = |p: Pixel| (p.y - min_y + 1) as usize * w + (p.x - min_x + 1) as usize;
        for &p in &self.pixels {
            inside[index(p)] = true;
        }

        self.pixels
            .iter()
            .filter(|&&p| {
                NEIGHBORS
                    .iter()
                    .any(|&(dx, dy)| !inside[index(Pixel::new(p.x + dx, p.y + dy))])
            })
            .count()
    }

    /// Inclusive bounding box `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let first = self.pixels.first()?;
        Some(self.pixels.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        ))
    }
}

/// Flood-fill every foreground region and keep the one with the most pixels.
///
/// Regions are seeded in row-major scan order; on equal size the first one
/// found is kept. Returns `None` when the mask has no foreground.
pub fn largest_component(mask: &ForegroundMask) -> Option<Component> {
    let (w, h) = (mask.width() as i64, mask.height() as i64);
    let mut visited = vec![false; (w * h) as usize];
    let mut largest: Option<Vec<Pixel>> = None;
    let mut queue = VecDeque::new();

    for y0 in 0..h {
        for x0 in 0..w {
            if !mask.get(x0, y0) || visited[(y0 * w + x0) as usize] {
                continue;
            }

            visited[(y0 * w + x0) as usize] = true;
            queue.push_back(Pixel::new(x0, y0));
            let mut component = Vec::new();

            while let Some(p) = queue.pop_front() {
                component.push(p);
                for (dx, dy) in NEIGHBORS {
                    let (nx, ny) = (p.x + dx, p.y + dy);
                    if mask.get(nx, ny) && !visited[(ny * w + nx) as usize] {
                        visited[(ny * w + nx) as usize] = true;
                        queue.push_back(Pixel::new(nx, ny));
                    }
                }
            }

            if largest.as_ref().map_or(true, |l| component.len() > l.len()) {
                largest = Some(component);
            }
        }
    }

    largest.map(|pixels| Component { pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::ForegroundMode;
    use crate::raster::{ChannelLayout, Raster};

    /// Build a mask from rows of '#' (foreground) and '.' (background).
    fn mask_from(rows: &[&str]) -> ForegroundMask {
        let width = rows[0].len() as u32;
        let pixels = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| if b == b'#' { 0 } else { 255 }))
            .collect();
        let img = Raster::new(width, rows.len() as u32, ChannelLayout::Luma, pixels).unwrap();
        ForegroundMask::from_raster(&img, ForegroundMode::Black)
    }

    #[test]
    fn test_picks_largest() {
        let mask = mask_from(&["##....", "##..##", "....##", "....##"]);
        let comp = largest_component(&mask).unwrap();
        assert_eq!(comp.len(), 6);
        assert_eq!(comp.bounds(), Some((4, 1, 5, 3)));
    }

    #[test]
    fn test_diagonal_neighbors_are_separate() {
        let mask = mask_from(&["#.", ".#"]);
        let comp = largest_component(&mask).unwrap();
        assert_eq!(comp.len(), 1);
    }

    #[test]
    fn test_tie_keeps_first_in_scan_order() {
        let mask = mask_from(&["##.##"]);
        let comp = largest_component(&mask).unwrap();
        assert_eq!(comp.pixels[0], Pixel::new(0, 0));
    }

    #[test]
    fn test_no_foreground() {
        let mask = mask_from(&["....", "...."]);
        assert!(largest_component(&mask).is_none());
    }

    #[test]
    fn test_component_is_maximal() {
        // U shape: both arms are reachable through the bottom row
        let mask = mask_from(&["#..#", "#..#", "####"]);
        let comp = largest_component(&mask).unwrap();
        assert_eq!(comp.len(), 8);
    }

    #[test]
    fn test_pixel_perimeter_single_pixel() {
        let comp = Component {
            pixels: vec![Pixel::new(3, 3)],
        };
        assert_eq!(comp.pixel_perimeter(), 1);
    }

    #[test]
    fn test_pixel_perimeter_block() {
        let mask = mask_from(&["....", ".##.", ".##.", "...."]);
        let comp = largest_component(&mask).unwrap();
        // Every pixel of a 2x2 block is on the boundary
        assert_eq!(comp.pixel_perimeter(), 4);
    }

    #[test]
    fn test_pixel_perimeter_skips_interior() {
        let mask = mask_from(&["#####", "#####", "#####", "#####"]);
        let comp = largest_component(&mask).unwrap();
        // 5x4 block: 20 pixels, the inner 3x2 are interior
        assert_eq!(comp.pixel_perimeter(), 14);
    }

    #[test]
    fn test_pixel_perimeter_counts_hole_border() {
        let mask = mask_from(&["#####", "#####", "##.##", "#####", "#####"]);
        let comp = largest_component(&mask).unwrap();
        // 16 outer pixels plus the 4 pixels touching the hole
        assert_eq!(comp.pixel_perimeter(), 20);
    }
}
