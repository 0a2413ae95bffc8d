//! Foreground mask derived from a raster's luma.

use tracing::debug;

use super::ForegroundMode;
use crate::luminance::THRESHOLD;
use crate::raster::Raster;

/// Boolean grid with the same extent as its source raster; `true` is foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    foreground_is_dark: bool,
}

impl ForegroundMask {
    /// Binarize `raster` at luma 128 and select the foreground side.
    ///
    /// In `Auto` mode the dark side is foreground when it holds no more
    /// pixels than the light side.
    pub fn from_raster(raster: &Raster, mode: ForegroundMode) -> Self {
        let (width, height) = (raster.width, raster.height);
        let mut dark = Vec::with_capacity(raster.pixel_count());
        for y in 0..height {
            for x in 0..width {
                dark.push(raster.luma_at(x, y) < THRESHOLD);
            }
        }

        let foreground_is_dark = match mode {
            ForegroundMode::Black => true,
            ForegroundMode::White => false,
            ForegroundMode::Auto => {
                let n_dark = dark.iter().filter(|&&d| d).count();
                n_dark <= dark.len() - n_dark
            }
        };

        let bits = if foreground_is_dark {
            dark
        } else {
            dark.into_iter().map(|d| !d).collect()
        };

        debug!(?mode, foreground_is_dark, "built foreground mask");

        Self {
            width,
            height,
            bits,
            foreground_is_dark,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the chosen foreground is the below-threshold side.
    pub fn foreground_is_dark(&self) -> bool {
        self.foreground_is_dark
    }

    /// Foreground flag at `(x, y)`; coordinates outside the grid are background.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True when no pixel is foreground.
    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }
}
