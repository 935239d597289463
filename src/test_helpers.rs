//! Shared test utilities for the reframe test suite.
//!
//! Synthetic images only; no fixture files. The RGBA pattern encodes each
//! pixel's own coordinates, so tests can verify where a region ended up
//! after a crop or center by reading pixel values.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Deterministic opaque RGBA pattern: pixel (x, y) is (x%256, y%256, 128, 255).
pub fn patterned_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

/// Same pattern without an alpha channel, for JPEG sources.
pub fn patterned_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a patterned PNG test image to `path`.
pub fn write_png(path: &Path, width: u32, height: u32) {
    patterned_rgba(width, height).save(path).unwrap();
}

/// Write a patterned JPEG test image to `path`.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    patterned_rgb(width, height).save(path).unwrap();
}
