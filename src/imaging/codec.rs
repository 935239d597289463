//! Codec selection and pixel I/O.
//!
//! [`Codec`] is a closed set: this tool reads and writes JPEG and PNG,
//! nothing else. The variant is chosen by a pure function of the file
//! extension, and decoding forces that format on the reader, so dispatch is
//! by extension alone and never by content sniffing. A mislabeled file
//! fails with [`ImageError::Decode`] instead of silently decoding as
//! whatever it really is.
//!
//! Everything decodes to RGBA8. PNG keeps its alpha channel through every
//! later operation; JPEG comes in fully opaque and is flattened back to
//! RGB on the way out (the format has no alpha channel).

use super::params::{JpegQuality, PngCompression, SaveOptions};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, Rgb, RgbImage, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by codec dispatch, decoding, transforms, and saves.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("input path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported file type {extension:?} for {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
    #[error("failed to decode {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image buffer already released")]
    BufferReleased,
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),
}

/// Image codec selected from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Jpeg,
    Png,
}

impl Codec {
    /// Pick the codec for `path` from its extension, case-insensitively.
    ///
    /// `jpg`/`jpeg` select JPEG and `png` selects PNG; any other extension
    /// (or none) is [`ImageError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Codec::Jpeg),
            "png" => Ok(Codec::Png),
            _ => Err(ImageError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            }),
        }
    }

    fn format(self) -> ImageFormat {
        match self {
            Codec::Jpeg => ImageFormat::Jpeg,
            Codec::Png => ImageFormat::Png,
        }
    }

    /// Decode the file at `path` with this codec into an RGBA buffer.
    pub fn decode(self, path: &Path) -> Result<RgbaImage, ImageError> {
        let file = File::open(path)?;
        let decoded = ImageReader::with_format(BufReader::new(file), self.format())
            .decode()
            .map_err(|source| ImageError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(decoded.into_rgba8())
    }

    /// Encode `buffer` to `path` with this codec.
    pub fn encode(
        self,
        path: &Path,
        buffer: &RgbaImage,
        options: &SaveOptions,
    ) -> Result<(), ImageError> {
        match self {
            Codec::Png => encode_png(path, buffer, options.png_compression),
            Codec::Jpeg => encode_jpeg(path, buffer, options.jpeg_quality),
        }
    }
}

/// Write `buffer` to `path` as PNG, alpha channel included.
pub fn encode_png(
    path: &Path,
    buffer: &RgbaImage,
    compression: PngCompression,
) -> Result<(), ImageError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, compression.preset(), PngFilter::Adaptive);
    encoder
        .write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| ImageError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `buffer` to `path` as JPEG.
///
/// The alpha channel is dropped: stored RGB values pass through unchanged,
/// so fully transparent canvas areas come out black.
pub fn encode_jpeg(
    path: &Path,
    buffer: &RgbaImage,
    quality: JpegQuality,
) -> Result<(), ImageError> {
    let rgb = RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let pixel = buffer.get_pixel(x, y);
        Rgb([pixel[0], pixel[1], pixel[2]])
    });
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.value());
    encoder
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| ImageError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
