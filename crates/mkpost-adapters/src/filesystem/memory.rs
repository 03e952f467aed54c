//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mkpost_core::application::{ApplicationError, ports::Filesystem};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and all its ancestors (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let path: PathBuf = path.into();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn canonicalize(&self, path: &Path) -> mkpost_core::error::MkpostResult<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into())
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn write_new_file(&self, path: &Path, content: &str) -> mkpost_core::error::MkpostResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "Lock poisoned".into(),
        })?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        // Parent must have been created as a directory first.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
