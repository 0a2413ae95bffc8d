//! WASM-compatible wrapper types for raster data and detection results.
//!
//! This module provides JavaScript-friendly types that wrap the core Shapescan
//! types, handling the conversion between Rust and JavaScript representations.

use shapescan_core::{ChannelLayout, DetectionResult, Raster};
use wasm_bindgen::prelude::*;

/// Convert a core error into a JavaScript error value.
pub(crate) fn to_js_error(err: shapescan_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Raster width in pixels
    /// * `height` - Raster height in pixels
    /// * `channels` - 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA)
    /// * `pixels` - Interleaved pixel data, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        let layout = ChannelLayout::from_channels(channels as usize).map_err(to_js_error)?;
        Raster::new(width, height, layout, pixels)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    /// Get the raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of channels per pixel
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns the pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.inner
    }
}

/// Detection result wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsDetectionResult {
    inner: DetectionResult,
}

#[wasm_bindgen]
impl JsDetectionResult {
    /// Shape label: "circle", "triangle", "square", "rectangle" or "none"
    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> String {
        self.inner.shape.to_string()
    }

    /// Pixel count of the detected blob
    #[wasm_bindgen(getter)]
    pub fn area_px(&self) -> usize {
        self.inner.area_px
    }

    /// Polygon area of the simplified hull
    #[wasm_bindgen(getter)]
    pub fn area_geom(&self) -> f64 {
        self.inner.area_geom
    }

    /// Serialize to a plain object `{ shape, area_px, area_geom }`
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsDetectionResult {
    pub(crate) fn from_result(inner: DetectionResult) -> Self {
        Self { inner }
    }
}
