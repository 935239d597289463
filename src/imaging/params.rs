//! Parameter types for image encoding.
//!
//! These are small value types clamped on construction, so an out-of-range
//! CLI argument or library call can never reach the encoder.
//!
//! ## Types
//!
//! - [`JpegQuality`]: lossy encoding quality (1-100, default 75).
//! - [`PngCompression`]: zlib-style compression level (0-9, default 5),
//!   mapped onto the PNG encoder's Fast/Default/Best presets.
//! - [`SaveOptions`]: everything a save call needs beyond the path.

use image::codecs::png::CompressionType;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self(75)
    }
}

/// Compression level for PNG encoding (0-9).
///
/// The underlying encoder exposes three presets rather than nine levels, so
/// the level is bucketed: 0-2 fast, 3-6 default, 7-9 best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngCompression(u8);

impl PngCompression {
    pub fn new(level: u8) -> Self {
        Self(level.min(9))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// The encoder preset this level buckets into.
    pub fn preset(self) -> CompressionType {
        match self.0 {
            0..=2 => CompressionType::Fast,
            3..=6 => CompressionType::Default,
            _ => CompressionType::Best,
        }
    }
}

impl Default for PngCompression {
    fn default() -> Self {
        Self(5)
    }
}

/// Parameters for a save call.
///
/// Only the field matching the output codec applies; the other is ignored.
/// `release` frees the transformer's buffer after a successful save, which
/// is the default because a save is usually the last step of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    pub jpeg_quality: JpegQuality,
    pub png_compression: PngCompression,
    /// Free the buffer after saving; later operations fail cleanly.
    pub release: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: JpegQuality::default(),
            png_compression: PngCompression::default(),
            release: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_quality_clamps_to_valid_range() {
        assert_eq!(JpegQuality::new(0).value(), 1);
        assert_eq!(JpegQuality::new(50).value(), 50);
        assert_eq!(JpegQuality::new(255).value(), 100);
    }

    #[test]
    fn jpeg_quality_default_is_75() {
        assert_eq!(JpegQuality::default().value(), 75);
    }

    #[test]
    fn png_compression_clamps_to_nine() {
        assert_eq!(PngCompression::new(12).level(), 9);
        assert_eq!(PngCompression::new(0).level(), 0);
    }

    #[test]
    fn png_compression_default_is_five() {
        assert_eq!(PngCompression::default().level(), 5);
    }

    #[test]
    fn png_compression_buckets_into_presets() {
        assert!(matches!(PngCompression::new(0).preset(), CompressionType::Fast));
        assert!(matches!(PngCompression::new(2).preset(), CompressionType::Fast));
        assert!(matches!(
            PngCompression::new(5).preset(),
            CompressionType::Default
        ));
        assert!(matches!(PngCompression::new(9).preset(), CompressionType::Best));
    }

    #[test]
    fn save_options_default_releases() {
        let options = SaveOptions::default();
        assert!(options.release);
        assert_eq!(options.jpeg_quality.value(), 75);
        assert_eq!(options.png_compression.level(), 5);
    }
}
