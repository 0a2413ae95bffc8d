//! Raster transformations: rotation, resizing and tonal adjustments.
//!
//! Every function here is pure. It borrows its input raster and returns a
//! freshly allocated one, or a clone when the operation is an identity.
//!
//! # Edit Order
//!
//! The editing session applies transforms in this order:
//! 1. Rotation
//! 2. Resize to fit
//! 3. Contrast
//! 4. Grayscale or black-and-white
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downwards
//! - Rotation angles are in degrees; positive turns content clockwise on screen
//! - Resampling is nearest-neighbor throughout

mod resize;
mod rotation;
mod tone;

pub use resize::{fit_dimensions, resize};
pub use rotation::rotate;
pub use tone::{adjust_contrast, to_black_and_white, to_grayscale};
