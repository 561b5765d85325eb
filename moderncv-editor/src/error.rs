use std::path::PathBuf;

use thiserror::Error;

/// Error surface for the editing session, its command protocol and config.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Cv(#[from] moderncv_core::CvError),

    #[error("render error: {0}")]
    Render(#[from] moderncv_renderer::RenderError),

    #[error("export error: {0}")]
    Export(#[from] moderncv_export::ExportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Command(String),

    #[error("picture decode task failed: {0}")]
    DecodeTask(String),

    #[error("export task failed: {0}")]
    ExportTask(String),

    #[error("channel closed: {0}")]
    ChannelClosed(&'static str),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EditorError {
    EditorError::Io {
        path: path.into(),
        source,
    }
}
