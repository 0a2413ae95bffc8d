//! Shapescan WASM - WebAssembly bindings for Shapescan
//!
//! This crate exposes the shapescan-core transforms and shape detector to
//! JavaScript/TypeScript front ends. It holds no image state of its own; the
//! host keeps the current raster and passes it into each call.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for rasters and results
//! - `transform` - Decoding, rotate, resize, contrast, grayscale, black-and-white
//! - `detect` - Dominant-shape detection
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_raster, detect_shape, to_black_and_white } from '@shapescan/wasm';
//!
//! await init();
//!
//! const raster = decode_raster(new Uint8Array(await file.arrayBuffer()));
//! const result = detect_shape(to_black_and_white(raster), 20, "auto");
//! console.log(`${result.shape} (${result.area_px} px)`);
//! ```

use wasm_bindgen::prelude::*;

mod detect;
mod transform;
mod types;

// Re-export public types
pub use detect::detect_shape;
pub use transform::{
    adjust_contrast, decode_raster, resize, rotate, to_black_and_white, to_grayscale,
};
pub use types::{JsDetectionResult, JsRaster};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
