//! The transformer: one decoded buffer, transformed in place.
//!
//! [`ImageTransformer`] owns exactly one RGBA buffer at a time. Every
//! transform builds a replacement buffer and swaps it in; the previous
//! buffer is dropped by the swap, so there is never aliasing and never a
//! double free. Saving can release the buffer, after which every further
//! operation fails with [`ImageError::BufferReleased`].
//!
//! The tracked `width`/`height` always equal the buffer's real dimensions
//! while a buffer is present, including after
//! [`ImageTransformer::center`] grows the canvas.

use super::calculations::{centered_offset, cropped_size, scaled_size};
use super::codec::{self, Codec, ImageError};
use super::params::{JpegQuality, PngCompression, SaveOptions};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// A decoded image plus the operations that reshape it.
///
/// ```no_run
/// # use reframe::imaging::{ImageTransformer, PngCompression};
/// # fn run() -> Result<(), reframe::imaging::ImageError> {
/// let mut image = ImageTransformer::open("photo.png")?;
/// image.scale(0.5)?;
/// image.center(800, 800)?;
/// image.save_png("thumb.png", PngCompression::default(), true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImageTransformer {
    /// `None` once released by a save.
    buffer: Option<RgbaImage>,
    width: u32,
    height: u32,
}

impl ImageTransformer {
    /// Decode the image at `path` and record its size.
    ///
    /// Failure order matches the checks: [`ImageError::NotFound`] if the
    /// path does not exist, [`ImageError::UnsupportedFormat`] if the
    /// extension is not `jpg`/`jpeg`/`png`, [`ImageError::Decode`] if the
    /// codec rejects the content. No partial transformer is ever returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImageError::NotFound(path.to_path_buf()));
        }
        let codec = Codec::from_path(path)?;
        let buffer = codec.decode(path)?;
        Ok(Self::from_buffer(buffer))
    }

    /// Wrap an already-decoded buffer.
    pub fn from_buffer(buffer: RgbaImage) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            buffer: Some(buffer),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the buffer has been freed by a releasing save.
    pub fn is_released(&self) -> bool {
        self.buffer.is_none()
    }

    /// Read-only view of the current buffer.
    pub fn buffer(&self) -> Result<&RgbaImage, ImageError> {
        self.buffer.as_ref().ok_or(ImageError::BufferReleased)
    }

    /// Swap in a replacement buffer; the old one is dropped here.
    fn replace(&mut self, next: RgbaImage) {
        self.width = next.width();
        self.height = next.height();
        self.buffer = Some(next);
    }

    /// Scale both dimensions by `factor` with bilinear resampling.
    ///
    /// `factor == 1.0` is a no-op. Output dimensions follow
    /// [`scaled_size`]: rounded to the nearest pixel, at least 1 per axis.
    /// Non-finite or non-positive factors are rejected before any work.
    pub fn scale(&mut self, factor: f64) -> Result<(), ImageError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ImageError::InvalidScaleFactor(factor));
        }
        let source = self.buffer()?;
        if factor == 1.0 {
            return Ok(());
        }
        let (new_width, new_height) = scaled_size(self.width, self.height, factor);
        let scaled = imageops::resize(source, new_width, new_height, FilterType::Triangle);
        self.replace(scaled);
        Ok(())
    }

    /// Crop to at most `target_width` x `target_height`, keeping the
    /// top-left region.
    ///
    /// Each target dimension is clamped to the current size, and the crop
    /// is a no-op when the clamped size is not smaller than the current
    /// size in either dimension. The origin is always (0, 0): this crops
    /// from the top-left corner, never centered.
    pub fn crop(&mut self, target_width: u32, target_height: u32) -> Result<(), ImageError> {
        let source = self.buffer()?;
        let (crop_width, crop_height) =
            cropped_size(self.width, self.height, target_width, target_height);
        if crop_width >= self.width && crop_height >= self.height {
            return Ok(());
        }
        let cropped = imageops::crop_imm(source, 0, 0, crop_width, crop_height).to_image();
        self.replace(cropped);
        Ok(())
    }

    /// Center the image on a transparent `target_width` x `target_height`
    /// canvas.
    ///
    /// The offset follows [`centered_offset`]; when both offsets are 0
    /// (canvas not larger than the image in either dimension) this is a
    /// no-op and the image is left untouched. Pixels are copied straight
    /// onto the canvas and clipped at its edges, and the tracked size
    /// becomes the canvas size.
    pub fn center(&mut self, target_width: u32, target_height: u32) -> Result<(), ImageError> {
        let source = self.buffer()?;
        let (x, y) = centered_offset(self.width, self.height, target_width, target_height);
        if x == 0 && y == 0 {
            return Ok(());
        }
        let mut canvas = RgbaImage::from_pixel(target_width, target_height, Rgba([0, 0, 0, 0]));
        imageops::replace(&mut canvas, source, i64::from(x), i64::from(y));
        self.replace(canvas);
        Ok(())
    }

    /// Encode the current buffer to `path` as PNG, alpha included.
    ///
    /// With `release`, the buffer is freed after a successful write and
    /// every later operation returns [`ImageError::BufferReleased`].
    pub fn save_png(
        &mut self,
        path: impl AsRef<Path>,
        compression: PngCompression,
        release: bool,
    ) -> Result<(), ImageError> {
        codec::encode_png(path.as_ref(), self.buffer()?, compression)?;
        if release {
            self.release();
        }
        Ok(())
    }

    /// Encode the current buffer to `path` as JPEG (alpha flattened).
    ///
    /// Release semantics match [`save_png`](Self::save_png).
    pub fn save_jpeg(
        &mut self,
        path: impl AsRef<Path>,
        quality: JpegQuality,
        release: bool,
    ) -> Result<(), ImageError> {
        codec::encode_jpeg(path.as_ref(), self.buffer()?, quality)?;
        if release {
            self.release();
        }
        Ok(())
    }

    /// Encode to `path`, choosing the codec from the output extension.
    pub fn save(&mut self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<(), ImageError> {
        let path = path.as_ref();
        let codec = Codec::from_path(path)?;
        codec.encode(path, self.buffer()?, options)?;
        if options.release {
            self.release();
        }
        Ok(())
    }

    /// Free the buffer now. Dimensions stay readable; pixel operations
    /// fail from here on.
    pub fn release(&mut self) {
        self.buffer = None;
    }
}
