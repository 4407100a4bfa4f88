use std::io::Write;
use std::path::Path;

use tasklane_core::{BoardError, BoardResult};

/// Atomic file writer that prevents snapshot corruption.
/// Uses the write-to-temp-file then atomic-rename pattern so a crash
/// mid-write never leaves a half-written slot behind.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically.
    /// The temp file is created in the target directory to stay on the
    /// same filesystem, making the rename atomic on POSIX systems.
    pub fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file
            .persist(path)
            .map_err(|e| BoardError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file.
    pub fn read_all(path: &Path) -> BoardResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
