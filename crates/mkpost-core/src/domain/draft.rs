//! The post draft entity.
//!
//! A [`PostDraft`] is the transient aggregate built from a raw title: the
//! normalized display title, the slug, the creation date, and the metadata
//! that ends up in the file header. It knows how to name its own file and
//! render its own template; persistence is the application layer's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, slug::Slug, title::DisplayTitle};

/// A skeleton post, constructed and validated in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    title: DisplayTitle,
    slug: Slug,
    date: NaiveDate,
    tags: Vec<String>,
    extension: String,
}

impl PostDraft {
    /// Build a draft from a raw title.
    ///
    /// Both normalizations (display title and slug) happen here, so a
    /// `PostDraft` in hand is always internally consistent.
    pub fn from_raw(
        raw_title: &str,
        date: NaiveDate,
        tags: &[String],
        extension: &str,
    ) -> Result<Self, DomainError> {
        let title = DisplayTitle::new(raw_title)?;
        let slug = Slug::new(raw_title)?;

        Ok(Self {
            title,
            slug,
            date,
            tags: tags.to_vec(),
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    pub fn title(&self) -> &DisplayTitle {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// File name for this draft: `{date}_{slug}.{extension}`.
    ///
    /// `NaiveDate` displays as ISO-8601 (`YYYY-MM-DD`).
    pub fn file_name(&self) -> String {
        format!("{}_{}.{}", self.date, self.slug, self.extension)
    }

    /// Render the post template.
    ///
    /// The shape is a fixed contract with the site generator: colon-delimited
    /// header fields in fixed order, a blank line, a body placeholder, and a
    /// trailing blank line.
    pub fn render(&self) -> String {
        format!(
            "Title: {}\nDate: {}\nTags: {}\nSlug: {}\n\nText here\n\n",
            self.title,
            self.date,
            self.tags.join(", "),
            self.slug,
        )
    }
}
