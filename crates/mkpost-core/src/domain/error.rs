use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The raw title is empty or whitespace-only.
    #[error("title is empty")]
    EmptyTitle,

    /// The title produced an empty slug (nothing survives normalization).
    #[error("title '{title}' cannot be turned into a slug")]
    UnsluggableTitle { title: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTitle => vec![
                "Provide a non-empty post title".into(),
                "Example: mkpost \"hello world\"".into(),
            ],
            Self::UnsluggableTitle { title } => vec![
                format!("'{}' contains no letters or digits", title),
                "Slugs keep only ASCII letters, digits, and hyphens".into(),
                "Add at least one word to the title".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTitle | Self::UnsluggableTitle { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
