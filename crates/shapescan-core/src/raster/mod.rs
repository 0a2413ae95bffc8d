//! Raster value type and raster acquisition.
//!
//! A [`Raster`] is the unit every transform and the detector consume. Rasters
//! are obtained from encoded bytes or files with [`decode_raster`] and
//! [`load_raster`], or built directly from a pixel buffer with [`Raster::new`].
//!
//! # Examples
//!
//! ```ignore
//! use shapescan_core::raster::load_raster;
//!
//! let raster = load_raster("Resources/Image1.png")?;
//! println!("Loaded {}x{} raster", raster.width(), raster.height());
//! ```

mod io;
mod types;

pub use io::{decode_raster, load_raster};
pub use types::{ChannelLayout, Raster};
