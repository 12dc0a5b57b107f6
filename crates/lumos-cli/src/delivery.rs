use std::path::PathBuf;

use lumos_export::{Download, ExportError, FileDelivery};

/// Offers downloads through the native "Save as" dialog.
#[cfg(feature = "dialog")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogDelivery;

#[cfg(feature = "dialog")]
impl FileDelivery for DialogDelivery {
    fn deliver(&self, download: &Download) -> Result<PathBuf, ExportError> {
        let path = rfd::FileDialog::new()
            .set_file_name(&download.filename)
            .save_file()
            .ok_or(ExportError::Cancelled)?;

        let dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| download.filename.clone());

        lumos_export::delivery::write_atomically(&dir, &filename, &download.bytes)
    }
}

/// Writes downloads to stdout. The returned location is `-`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDelivery;

impl FileDelivery for StdoutDelivery {
    fn deliver(&self, download: &Download) -> Result<PathBuf, ExportError> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&download.bytes)
            .and_then(|()| stdout.flush())
            .map_err(|source| ExportError::Write {
                path: PathBuf::from("-"),
                source,
            })?;
        Ok(PathBuf::from("-"))
    }
}

/// The dialog delivery when compiled in.
#[cfg(feature = "dialog")]
pub fn dialog() -> eyre::Result<Box<dyn FileDelivery>> {
    Ok(Box::new(DialogDelivery))
}

#[cfg(not(feature = "dialog"))]
pub fn dialog() -> eyre::Result<Box<dyn FileDelivery>> {
    Err(eyre::eyre!(
        "this build has no save dialog; rebuild with `--features dialog` or use --out"
    ))
}
