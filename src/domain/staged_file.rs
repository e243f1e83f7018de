use std::io;
use std::path::{Path, PathBuf};

/// Temporary on-disk copy of an upload.
///
/// The file is removed when the value is dropped, so moving a `StagedFile`
/// into a request scope bounds the file's lifetime to that scope.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    size_bytes: u64,
}

impl StagedFile {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        Self { path, size_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Staged file removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged file")
            }
        }
    }
}
