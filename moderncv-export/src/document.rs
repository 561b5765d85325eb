//! Word-processor export: the preview fragment wrapped in a minimal HTML
//! document that word processors open as `.doc`.

use std::path::Path;

use crate::error::ExportError;
use crate::writer::{write_atomic, ExportReceipt};

/// File name used when the user gives no destination.
pub const DEFAULT_DOCUMENT_FILE: &str = "cv.doc";

pub trait DocumentExporter: Send + Sync {
    fn export(&self, markup: &str, dest: &Path) -> Result<ExportReceipt, ExportError>;
}

/// Writes `<!DOCTYPE html><html><body>{markup}</body></html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsWordHtmlExporter;

impl MsWordHtmlExporter {
    pub fn wrap(markup: &str) -> String {
        format!("<!DOCTYPE html><html><body>{markup}</body></html>")
    }
}

impl DocumentExporter for MsWordHtmlExporter {
    fn export(&self, markup: &str, dest: &Path) -> Result<ExportReceipt, ExportError> {
        let receipt = write_atomic(dest, Self::wrap(markup).as_bytes())?;
        tracing::info!(path = %receipt.path.display(), bytes = receipt.bytes, "exported document");
        Ok(receipt)
    }
}
