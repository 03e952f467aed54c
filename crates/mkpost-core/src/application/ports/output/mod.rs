//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mkpost-adapters` crate provides implementations.

use crate::error::MkpostResult;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkpost_adapters::filesystem::LocalFilesystem` (production)
/// - `mkpost_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Resolve a path to its canonical absolute form.
    fn canonicalize(&self, path: &Path) -> MkpostResult<PathBuf>;

    /// Check if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a file and write its full content in one pass.
    ///
    /// Must fail with `ApplicationError::AlreadyExists` when the path
    /// already exists, never truncate.
    fn write_new_file(&self, path: &Path, content: &str) -> MkpostResult<()>;
}

/// Port for reading the calendar date.
///
/// Implemented by:
/// - `mkpost_adapters::clock::SystemClock` (production)
/// - `mkpost_adapters::clock::FixedClock` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's date, local time, date component only.
    fn today(&self) -> NaiveDate;
}
