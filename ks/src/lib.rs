//! KeyStore - durable key-value snapshot storage
//!
//! Each key holds one opaque string blob that is always replaced wholesale.
//! There are no partial writes and no transaction log: `write` overwrites the
//! previous value, `read` returns whatever was written last.
//!
//! # Backends
//!
//! - [`FileStorage`] - one file per key inside a directory. A write goes to a
//!   temp file and is renamed into place while holding an exclusive lock on a
//!   per-key `.lock` sidecar
//! - [`MemoryStorage`] - in-process map, with switchable write failures
//!
//! # Example
//!
//! ```ignore
//! use keystore::{FileStorage, Storage};
//!
//! let mut storage = FileStorage::open("~/.local/share/launchpad")?;
//! storage.write("tools", "[]")?;
//! assert_eq!(storage.read("tools")?.as_deref(), Some("[]"));
//! ```

mod error;
mod file;
mod memory;

pub use error::{Result, StorageError};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A durable slot-per-key string store
pub trait Storage {
    /// Read the blob stored under `key`, or `None` if nothing was written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Check that a key is usable as a storage slot name
///
/// Keys map directly onto file names, so only `[A-Za-z0-9._-]` is allowed
/// and a leading dot is rejected (temp files use that prefix).
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
