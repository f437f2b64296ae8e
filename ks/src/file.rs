//! File-backed storage: one `<key>.json` file per key

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::{Storage, validate_key};

/// Storage that keeps each key in its own file under a base directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the slot files
    base_path: PathBuf,
}

impl FileStorage {
    /// Open or create a file store at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| StorageError::io(&base_path.to_string_lossy(), e))?;
        debug!(?base_path, "Opened file storage");
        Ok(Self { base_path })
    }

    /// Directory holding the slot files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Path of the sidecar that writers of `key` lock
    pub fn lock_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.lock", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(key, bytes = content.len(), "read: slot found");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "read: slot absent");
                Ok(None)
            }
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    /// Write-to-temp then rename, so readers only ever see a complete snapshot.
    ///
    /// Writers for the same key serialize on the `.<key>.lock` sidecar, which
    /// is held across the temp write and the rename.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let temp_path = self
            .base_path
            .join(format!(".{}.json.{}.tmp", key, std::process::id()));

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path(key))
            .map_err(|e| StorageError::io(key, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|_| StorageError::LockFailed { key: key.to_string() })?;

        let result = write_temp(&temp_path, value)
            .map_err(|e| match e.kind() {
                ErrorKind::StorageFull => StorageError::QuotaExceeded { key: key.to_string() },
                _ => StorageError::io(key, e),
            })
            .and_then(|_| fs::rename(&temp_path, &path).map_err(|e| StorageError::io(key, e)));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }

        // Closing the handle releases the lock too
        let _ = FileExt::unlock(&lock_file);
        result?;

        debug!(key, bytes = value.len(), "write: slot replaced");
        Ok(())
    }
}

fn write_temp(temp_path: &Path, value: &str) -> std::io::Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;
    temp_file.write_all(value.as_bytes())?;
    temp_file.sync_all()
}
