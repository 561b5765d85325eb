//! Atomic file writer.
//!
//! 1. Create the parent directory if needed.
//! 2. Write to `<path>.moderncv.tmp`.
//! 3. Rename to the final path (atomic on POSIX).
//!
//! A failed rename removes the temp file so no partial export is left behind.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{io_err, ExportError};

/// Outcome of a finished export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub bytes: u64,
    pub exported_at: DateTime<Utc>,
}

impl ExportReceipt {
    pub(crate) fn new(path: &Path, bytes: u64) -> Self {
        ExportReceipt {
            path: path.to_path_buf(),
            bytes,
            exported_at: Utc::now(),
        }
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.moderncv.tmp", path.display()))
}

/// Atomically replace `path` with `content`.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<ExportReceipt, ExportError> {
    write_atomic_with_tmp(path, content, &tmp_path(path))
}

fn write_atomic_with_tmp(
    path: &Path,
    content: &[u8],
    tmp: &Path,
) -> Result<ExportReceipt, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(ExportReceipt::new(path, content.len() as u64))
}
