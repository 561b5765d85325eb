//! Error types for moderncv-export.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from decoding pictures or exporting a CV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The picture file was empty.
    #[error("image is empty")]
    EmptyImage,

    /// The picture exceeds the configured size limit.
    #[error("image is {size} bytes, limit is {max} bytes")]
    ImageTooLarge { size: usize, max: usize },

    /// The bytes do not start with a known image signature.
    #[error("unsupported image format (expected PNG, JPEG, GIF, WebP or SVG)")]
    UnsupportedFormat,

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No raster program was configured.
    #[error("no raster command configured (set raster_command in config.yaml)")]
    NoRasterCommand,

    /// The external raster program failed or produced nothing.
    #[error("raster command '{program}' failed: {message}")]
    Command { program: String, message: String },
}

/// Convenience constructor for [`ExportError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.into(),
        source,
    }
}
