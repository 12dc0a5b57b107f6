//! File-delivery collaborators.
//!
//! The generator never touches the filesystem itself. It wraps its output in
//! a [`Download`] and hands it to whatever [`FileDelivery`] the host wires
//! in: a directory on disk, an in-memory sink, or a native save dialog.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// A buffer offered to the user as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub filename: String,
}

/// Offers a [`Download`] to the user. Returns where the file ended up.
pub trait FileDelivery {
    fn deliver(&self, download: &Download) -> Result<PathBuf, ExportError>;
}

/// Writes downloads into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, download: &Download) -> Result<PathBuf, ExportError> {
        write_atomically(&self.dir, &download.filename, &download.bytes)
    }
}

/// Write `bytes` to `dir/filename` through a temp file and a rename, so a
/// reader never sees a half-written file.
pub fn write_atomically(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| write_error(dir, source))?;

    let path = dir.join(filename);
    let tmp_path = dir.join(format!("{filename}.tmp"));
    std::fs::write(&tmp_path, bytes).map_err(|source| write_error(&tmp_path, source))?;
    std::fs::rename(&tmp_path, &path).map_err(|source| write_error(&path, source))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(path)
}

fn write_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Keeps every delivered download in memory.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    delivered: Mutex<Vec<Download>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn downloads(&self) -> Vec<Download> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn last(&self) -> Option<Download> {
        self.downloads().pop()
    }
}

impl FileDelivery for MemoryDelivery {
    fn deliver(&self, download: &Download) -> Result<PathBuf, ExportError> {
        self.delivered
            .lock()
            .map_err(|e| ExportError::Delivery(e.to_string()))?
            .push(download.clone());
        Ok(PathBuf::from(&download.filename))
    }
}
