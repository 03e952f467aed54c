//! Implementation of the post-scaffolding command.
//!
//! Responsibility: translate CLI arguments into a scaffold request, call the
//! core service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use mkpost_adapters::{LocalFilesystem, SystemClock};
use mkpost_core::application::ScaffoldService;

use crate::{
    cli::{PostArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the scaffolding command.
///
/// Dispatch sequence:
/// 1. Resolve the content directory (`--dir` wins over config)
/// 2. Build the service with the production adapters
/// 3. Scaffold the post
/// 4. Report the created path
#[instrument(skip_all, fields(title = %args.title))]
pub fn execute(
    args: PostArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the content directory.
    let directory: PathBuf = args.dir.unwrap_or_else(|| config.scaffold.content_dir.clone());
    debug!(
        directory = %directory.display(),
        extension = %config.scaffold.extension,
        tags = ?config.scaffold.default_tags,
        "Scaffold request resolved"
    );
    if global.verbose > 0 {
        output.info(&format!("Content directory: {}", directory.display()))?;
    }

    // 2. Wire the production adapters.
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock::new()),
    );

    // 3. Scaffold.
    let post = service.scaffold(
        &args.title,
        &directory,
        &config.scaffold.default_tags,
        &config.scaffold.extension,
    )?;

    info!(path = %post.path.display(), slug = %post.slug, "Scaffold completed");

    // 4. Report.
    output.success(&format!("Created {}", post.path.display()))?;
    if global.verbose > 0 && !output.is_quiet() {
        output.print(&format!("  Title: {}", post.title))?;
        output.print(&format!("  Date:  {}", post.date))?;
        output.print(&format!("  Slug:  {}", post.slug))?;
    }

    Ok(())
}
