use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("destination directory missing or not writable: {0}")]
    Destination(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// The destination must already exist and be a writable directory; the
/// pipeline never creates directories on the operator's behalf.
pub fn check_destination_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir).map_err(|e| PersistError::Destination(e.to_string()))?;
    if !meta.is_dir() {
        return Err(PersistError::Destination("path is not a directory".into()));
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::Destination(e.to_string()))?;
    Ok(())
}

/// Writes `{dir}/{filename}` by writing a temp file then renaming, so a
/// failed run never leaves a partial file behind.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
        check_destination_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
