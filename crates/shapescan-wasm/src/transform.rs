//! WASM bindings for raster acquisition and transform operations.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const raster = decode_raster(new Uint8Array(await file.arrayBuffer()));
//! const preview = resize(rotate(raster, 15.0), 300, 240);
//! ```

use crate::types::{to_js_error, JsRaster};
use shapescan_core::{raster, transform};
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into a raster, keeping the decoded channel layout.
#[wasm_bindgen]
pub fn decode_raster(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    raster::decode_raster(bytes)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Rotate a raster around its center on a fixed canvas.
///
/// Content rotated past the edges is clipped; uncovered pixels are zero.
#[wasm_bindgen]
pub fn rotate(image: &JsRaster, angle_degrees: f64) -> JsRaster {
    JsRaster::from_raster(transform::rotate(image.raster(), angle_degrees))
}

/// Resize a raster to fit within `max_width x max_height`, preserving aspect ratio.
#[wasm_bindgen]
pub fn resize(image: &JsRaster, max_width: u32, max_height: u32) -> Result<JsRaster, JsValue> {
    transform::resize(image.raster(), max_width, max_height)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Scale color channels around 128 by `factor`.
#[wasm_bindgen]
pub fn adjust_contrast(image: &JsRaster, factor: f32) -> JsRaster {
    JsRaster::from_raster(transform::adjust_contrast(image.raster(), factor))
}

/// Convert to grayscale (1 channel, or 2 with alpha).
#[wasm_bindgen]
pub fn to_grayscale(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::to_grayscale(image.raster()))
}

/// Threshold at luma 128 (1 channel, or 2 with alpha).
#[wasm_bindgen]
pub fn to_black_and_white(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(transform::to_black_and_white(image.raster()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_resize_zero_target_is_error() {
        let img = JsRaster::new(2, 2, 1, vec![0; 4]).unwrap();
        assert!(resize(&img, 0, 10).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage_is_error() {
        assert!(decode_raster(&[1, 2, 3]).is_err());
    }
}
