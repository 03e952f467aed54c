//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve and validate the content directory
//! 2. Build the post draft (title, slug, date)
//! 3. Compose the target path and check for collisions
//! 4. Write the template to the filesystem
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem},
    },
    domain::PostDraft,
    error::{MkpostError, MkpostResult},
};

/// Information about a created post, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedPost {
    pub path: PathBuf,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
}

/// Main scaffolding service.
///
/// Orchestrates draft construction, collision checking, and the single
/// file write. The whole operation is synchronous and either completes
/// atomically from the caller's perspective or fails before any mutation.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, clock: Box<dyn Clock>) -> Self {
        Self { filesystem, clock }
    }

    /// Scaffold a new post.
    ///
    /// This is the main use case - creates one skeleton post file from a
    /// raw title. `tags` and `extension` come from configuration.
    #[instrument(
        skip_all,
        fields(
            title = %raw_title.as_ref(),
            directory = %directory.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        raw_title: impl AsRef<str>,
        directory: impl AsRef<Path>,
        tags: &[String],
        extension: &str,
    ) -> MkpostResult<ScaffoldedPost> {
        let raw_title = raw_title.as_ref();

        // 1. The directory must exist before anything else happens.
        let directory = self.resolve_directory(directory.as_ref())?;

        // 2. Build the draft (display title, slug, today's date).
        let draft = PostDraft::from_raw(raw_title, self.clock.today(), tags, extension)
            .map_err(MkpostError::Domain)?;
        debug!(slug = %draft.slug(), date = %draft.date(), "Draft built");

        // 3. Compose the target path and refuse to overwrite.
        let target = directory.join(draft.file_name());
        if self.filesystem.exists(&target) {
            return Err(ApplicationError::AlreadyExists { path: target }.into());
        }

        // 4. Single write; the adapter's create-new semantics cover the
        //    exists-check race.
        self.filesystem.write_new_file(&target, &draft.render())?;

        info!(path = %target.display(), "Post created");
        Ok(ScaffoldedPost {
            path: target,
            title: draft.title().to_string(),
            slug: draft.slug().to_string(),
            date: draft.date(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve the content directory to an absolute path, failing when it
    /// does not exist or is not a directory.
    fn resolve_directory(&self, directory: &Path) -> MkpostResult<PathBuf> {
        if !self.filesystem.is_dir(directory) {
            return Err(ApplicationError::NotADirectory {
                path: directory.to_path_buf(),
            }
            .into());
        }
        self.filesystem.canonicalize(directory)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
