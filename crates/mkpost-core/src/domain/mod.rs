//! Core domain layer for mkpost.
//!
//! This module contains pure business logic. All I/O and clock concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod draft;
pub mod error;
pub mod slug;
pub mod title;

// Re-exports for convenience
pub use draft::PostDraft;
pub use error::{DomainError, ErrorCategory};
pub use slug::Slug;
pub use title::DisplayTitle;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ========================================================================
    // Cross-type invariants
    // ========================================================================

    #[test]
    fn draft_slug_matches_standalone_slug() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let draft = PostDraft::from_raw("Some Post Title", date, &[], "md").unwrap();
        assert_eq!(draft.slug(), &Slug::new("Some Post Title").unwrap());
    }

    #[test]
    fn draft_title_matches_standalone_title() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let draft = PostDraft::from_raw("some post title", date, &[], "md").unwrap();
        assert_eq!(draft.title(), &DisplayTitle::new("some post title").unwrap());
    }

    #[test]
    fn rendered_header_contains_file_name_slug() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let draft = PostDraft::from_raw("hello world", date, &[], "md").unwrap();
        let rendered = draft.render();
        let slug_line = rendered
            .lines()
            .find(|l| l.starts_with("Slug: "))
            .expect("slug header line");
        assert!(draft.file_name().contains(slug_line.trim_start_matches("Slug: ")));
    }
}
