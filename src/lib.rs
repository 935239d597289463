//! # Reframe
//!
//! A small utility for reshaping raster images: load a PNG or JPEG, scale
//! it, crop it, or center it on a transparent canvas, and save it back to
//! disk. Usable as a library through [`imaging::ImageTransformer`] or from
//! the `reframe` binary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | The core: codec dispatch, transform geometry, and the buffer-owning [`imaging::ImageTransformer`] |
//! | [`batch`] | One [`batch::Operation`] applied to a file or a whole directory tree, in parallel |
//! | [`output`] | Pure formatting of batch reports for the CLI |
//!
//! # Design Decisions
//!
//! ## Extension-Dispatched Codecs
//!
//! The format of a file is decided by its extension alone, both on input
//! and on output. [`imaging::Codec`] is a closed two-variant enum chosen
//! by a pure function, and decoding forces that format on the reader, so
//! a `.jpg` full of PNG bytes is an error rather than a silent surprise.
//! Dispatching this way keeps save-to-any-extension behavior predictable:
//! `reframe convert in.png out.jpg` means exactly what it says.
//!
//! ## Single-Owner Pixel Buffer
//!
//! An [`imaging::ImageTransformer`] owns exactly one RGBA buffer. Each
//! transform builds its replacement and swaps it in, dropping the old one;
//! a save can release the buffer, after which operations fail with
//! [`imaging::ImageError::BufferReleased`]. There is no sharing and no
//! reference counting anywhere, and the tracked width/height always match
//! the buffer that is actually present.
//!
//! ## Bilinear Resampling
//!
//! Scaling uses bilinear (`Triangle`) interpolation. It is smooth, cheap,
//! and matches the output of the classic area-averaging resample this tool
//! replaces; sharper kernels produce visibly different pixels for the same
//! inputs.

pub mod batch;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
