//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use mkpost_core::{application::ports::Filesystem, error::MkpostResult};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn canonicalize(&self, path: &Path) -> MkpostResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| map_io_error(path, e, "resolve path"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write_new_file(&self, path: &Path, content: &str) -> MkpostResult<()> {
        // create_new keeps the existence check honest under races: if a
        // concurrent invocation won, this surfaces as AlreadyExists instead
        // of truncating the winner's file.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => {
                    mkpost_core::application::ApplicationError::AlreadyExists {
                        path: path.to_path_buf(),
                    }
                    .into()
                }
                _ => map_io_error(path, e, "create file"),
            })?;

        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mkpost_core::error::MkpostError {
    use mkpost_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkpost_core::application::ApplicationError;
    use mkpost_core::error::MkpostError;

    #[test]
    fn write_new_file_creates_file_with_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");

        LocalFilesystem::new().write_new_file(&path, "Title: X\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Title: X\n");
    }

    #[test]
    fn write_new_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "original").unwrap();

        let err = LocalFilesystem::new()
            .write_new_file(&path, "clobbered")
            .unwrap_err();

        assert!(matches!(
            err,
            MkpostError::Application(ApplicationError::AlreadyExists { .. })
        ));
        // Existing bytes untouched.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn is_dir_distinguishes_files_from_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, "").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.is_dir(dir.path()));
        assert!(!fs.is_dir(&file));
        assert!(!fs.is_dir(&dir.path().join("missing")));
    }

    #[test]
    fn canonicalize_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.canonicalize(&dir.path().join("missing")).is_err());
        assert!(fs.canonicalize(dir.path()).unwrap().is_absolute());
    }
}
