//! Error types for moderncv-renderer.

use std::path::PathBuf;

use thiserror::Error;

use moderncv_core::CvError;

/// All errors that can arise from rendering a preview.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Label dictionary failed to load.
    #[error("labels: {0}")]
    Labels(#[from] CvError),

    /// Strict template lookup failed (the lenient path falls back instead).
    #[error("unknown template '{0}'; expected: modern, classic, minimalist")]
    UnknownTemplate(String),
}
