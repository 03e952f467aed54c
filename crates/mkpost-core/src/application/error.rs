//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The content directory does not exist or is not a directory.
    /// Detected before any write.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// The target post file already exists. Detected before any write;
    /// never overwritten, never auto-suffixed.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotADirectory { path } => vec![
                format!("'{}' must be an existing directory", path.display()),
                format!("Create it first: mkdir -p {}", path.display()),
                "Or point --dir at your content directory".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("A post already exists at: {}", path.display()),
                "Pick a different title, or edit the existing file".into(),
                "Posts are never overwritten".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotADirectory { .. } => ErrorCategory::Configuration,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
