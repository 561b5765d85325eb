//! Picture decoding: raw file bytes to an embeddable data URI.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ExportError;

/// Largest picture accepted unless configured otherwise (10 MiB).
pub const DEFAULT_MAX_PICTURE_BYTES: usize = 10 * 1024 * 1024;

/// How far into an SVG file the `<svg` tag is looked for.
const SVG_SNIFF_WINDOW: usize = 1024;

/// Turns the bytes of a user-chosen file into a value for `profilePicture`.
///
/// Implementations run on a blocking thread, so they must be shareable.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Svg,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
        }
    }

    /// Identify the format from its leading signature bytes.
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            return Some(ImageFormat::Png);
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(ImageFormat::Gif);
        }
        if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return Some(ImageFormat::Webp);
        }
        if looks_like_svg(bytes) {
            return Some(ImageFormat::Svg);
        }
        None
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SVG_SNIFF_WINDOW)];
    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    (trimmed.starts_with("<svg") || trimmed.starts_with("<?xml")) && trimmed.contains("<svg")
}

/// Base64 data-URI encoder with signature sniffing and a size cap.
#[derive(Debug, Clone)]
pub struct DataUriDecoder {
    max_bytes: usize,
}

impl DataUriDecoder {
    pub fn new(max_bytes: usize) -> Self {
        DataUriDecoder { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl Default for DataUriDecoder {
    fn default() -> Self {
        DataUriDecoder::new(DEFAULT_MAX_PICTURE_BYTES)
    }
}

impl ImageDecoder for DataUriDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, ExportError> {
        if bytes.is_empty() {
            return Err(ExportError::EmptyImage);
        }
        if bytes.len() > self.max_bytes {
            return Err(ExportError::ImageTooLarge {
                size: bytes.len(),
                max: self.max_bytes,
            });
        }
        let format = ImageFormat::sniff(bytes).ok_or(ExportError::UnsupportedFormat)?;
        tracing::debug!(format = %format, bytes = bytes.len(), "decoded picture");
        Ok(format!("data:{};base64,{}", format.mime(), STANDARD.encode(bytes)))
    }
}
