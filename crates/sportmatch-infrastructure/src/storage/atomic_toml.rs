//! Atomic TOML file operations.
//!
//! A thin layer for safe access to the TOML files SportMatch persists its
//! state in. Saves go through a temporary file, an fsync, and an atomic
//! rename, under an advisory file lock so a second accidental process
//! instance cannot interleave writes.

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use sportmatch_core::error::{Result, SportMatchError};

/// A handle to a TOML document on disk with atomic save semantics.
///
/// Loading a missing or empty file yields `None`; a present but unparseable
/// file yields a `Serialization` error so callers can decide how to degrade.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new handle for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// The file path this handle operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves the document atomically.
    ///
    /// Serializes to a temporary file in the same directory, fsyncs, then
    /// renames over the target while holding the advisory lock.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// The temporary file path used for atomic writes.
    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self.path.parent().ok_or_else(|| {
            SportMatchError::io(format!("path has no parent directory: {:?}", self.path))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            SportMatchError::io(format!("path has no file name: {:?}", self.path))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// An advisory lock guard, released when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                SportMatchError::data_access(format!("failed to acquire file lock: {}", e))
            })?;
        }

        // Non-Unix systems run without locking, which is acceptable for a
        // single-user desktop store.

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestDoc {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("store.toml");
        let atomic_file = AtomicTomlFile::<TestDoc>::new(file_path);

        let doc = TestDoc {
            name: "events".to_string(),
            count: 7,
        };

        atomic_file.save(&doc).unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing.toml");
        let atomic_file = AtomicTomlFile::<TestDoc>::new(file_path);

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.toml");
        fs::write(&file_path, "  \n").unwrap();
        let atomic_file = AtomicTomlFile::<TestDoc>::new(file_path);

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_garbage_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("garbage.toml");
        fs::write(&file_path, "not = = toml").unwrap();
        let atomic_file = AtomicTomlFile::<TestDoc>::new(file_path);

        let err = atomic_file.load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("store.toml");
        let atomic_file = AtomicTomlFile::<TestDoc>::new(file_path.clone());

        let doc = TestDoc {
            name: "events".to_string(),
            count: 1,
        };
        atomic_file.save(&doc).unwrap();

        assert!(!temp_dir.path().join(".store.toml.tmp").exists());
        assert!(file_path.exists());
    }
}
