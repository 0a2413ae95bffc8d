//! Shapescan Core - raster transforms and dominant-shape detection
//!
//! This crate provides the computational core of Shapescan: pure
//! nearest-neighbor transforms over pixel grids, and a detector that labels
//! the largest foreground blob of a raster as a circle, triangle, square,
//! rectangle, or nothing.
//!
//! # Module Structure
//!
//! - `raster` - The `Raster` value type and raster acquisition from bytes/files
//! - `transform` - Rotate, resize, contrast, grayscale, black-and-white
//! - `detect` - Mask, connected components, hull, simplification, classification
//! - `session` - An explicit editing session over a source raster
//!
//! Every operation is synchronous and keeps no state between calls. Inputs
//! are borrowed and never mutated, so a raster can be shared across threads.

pub mod detect;
pub mod error;
pub mod luminance;
pub mod raster;
pub mod session;
pub mod transform;

pub use detect::{detect_shape, DetectionOptions, DetectionResult, ForegroundMode, ShapeKind};
pub use error::{Error, Result};
pub use raster::{decode_raster, load_raster, ChannelLayout, Raster};
pub use session::{EditParams, EditSession, ToneMode};
pub use transform::{adjust_contrast, resize, rotate, to_black_and_white, to_grayscale};
