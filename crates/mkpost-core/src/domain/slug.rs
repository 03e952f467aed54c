//! URL-safe slug derivation.
//!
//! # Design
//!
//! [`Slug`] is a pure value type: equality-by-value, no identity. Derivation
//! is delegated to the `slug` crate, which lowercases, transliterates
//! non-ASCII characters, strips punctuation, and collapses separator runs
//! into single hyphens. The newtype guarantees that a `Slug` in hand is
//! never empty and always satisfies the slug invariants.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, URL-safe identifier derived from free text.
///
/// Invariants (enforced at construction):
/// - only lowercase ASCII letters, digits, and hyphens
/// - no leading/trailing hyphens, no consecutive hyphens
/// - never empty
/// - deterministic: the same input always yields the same slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a raw title.
    ///
    /// Fails with [`DomainError::UnsluggableTitle`] when nothing survives
    /// normalization (e.g. a title made of punctuation only).
    pub fn new(raw_title: &str) -> Result<Self, DomainError> {
        let normalized = slug::slugify(raw_title);
        if normalized.is_empty() {
            return Err(DomainError::UnsluggableTitle {
                title: raw_title.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
