//! WASM bindings for shape detection.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const result = detect_shape(raster, 20, "auto");
//! console.log(`${result.shape}: ${result.area_px} px`);
//! ```

use crate::types::{to_js_error, JsDetectionResult, JsRaster};
use shapescan_core::detect::{self, DetectionOptions, ForegroundMode};
use wasm_bindgen::prelude::*;

/// Detect the dominant foreground shape of a raster.
///
/// # Arguments
///
/// * `image` - Raster to analyse
/// * `min_component_area` - Blobs with fewer pixels are ignored (typically 20)
/// * `foreground` - "auto", "black" or "white"
///
/// # Errors
///
/// Returns an error if `foreground` is not one of the accepted values.
#[wasm_bindgen]
pub fn detect_shape(
    image: &JsRaster,
    min_component_area: usize,
    foreground: &str,
) -> Result<JsDetectionResult, JsValue> {
    let foreground: ForegroundMode = foreground.parse().map_err(to_js_error)?;
    let options = DetectionOptions {
        min_component_area,
        foreground,
    };
    Ok(JsDetectionResult::from_result(detect::detect_shape(
        image.raster(),
        &options,
    )))
}
