//! Image loading, transform geometry, and PNG/JPEG encoding.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (JPEG, PNG) | `image::ImageReader` with the format forced |
//! | **Scale** | `image::imageops::resize`, bilinear (`Triangle`) |
//! | **Crop** | `image::imageops::crop_imm`, top-left origin |
//! | **Center** | transparent canvas + `image::imageops::replace` |
//! | **Encode** | `PngEncoder` (RGBA) / `JpegEncoder` (flattened RGB) |
//!
//! The module is split into:
//! - **Calculations**: pure functions for transform geometry (unit testable)
//! - **Params**: clamped value types for encode parameters
//! - **Codec**: extension-dispatched [`Codec`] plus [`ImageError`]
//! - **Transformer**: [`ImageTransformer`], the buffer-owning core type

pub mod calculations;
pub mod codec;
pub mod params;
pub mod transformer;

pub use calculations::{centered_offset, cropped_size, scaled_size};
pub use codec::{Codec, ImageError};
pub use params::{JpegQuality, PngCompression, SaveOptions};
pub use transformer::ImageTransformer;
