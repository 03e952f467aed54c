//! Display-title normalization.
//!
//! Conventional heading rules: principal words are capitalized, small
//! connecting words stay lowercase unless they open or close the title.
//! Words that carry uppercase beyond their first character (acronyms,
//! mixed-case names like `iPhone`) are preserved verbatim.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Words kept lowercase mid-title.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor", "of", "on", "or",
    "per", "the", "to", "v", "v.", "via", "vs", "vs.",
];

/// A title-cased, whitespace-collapsed display title.
///
/// Normalization is idempotent: normalizing an already-normalized title
/// yields the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayTitle(String);

impl DisplayTitle {
    /// Normalize a raw title.
    ///
    /// Fails with [`DomainError::EmptyTitle`] when the input is empty or
    /// whitespace-only.
    pub fn new(raw_title: &str) -> Result<Self, DomainError> {
        let words: Vec<&str> = raw_title.split_whitespace().collect();
        if words.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let last = words.len() - 1;
        let cased: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, word)| title_case_word(word, i == 0 || i == last))
            .collect();

        Ok(Self(cased.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case a single word. `boundary` marks the first/last word of the title,
/// which is always capitalized even when it is a small word.
fn title_case_word(word: &str, boundary: bool) -> String {
    // Uppercase past the first character means acronym or mixed case.
    if word.chars().skip(1).any(char::is_uppercase) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if !boundary && SMALL_WORDS.contains(&lower.as_str()) {
        return lower;
    }
    capitalize_first(&lower)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
