//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// A single command, no subcommands: `mkpost TITLE [--dir DIR]`.
#[derive(Debug, Parser)]
#[command(
    name    = "mkpost",
    bin_name = "mkpost",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a skeleton post in Markdown format with basic metadata",
    long_about = "mkpost creates a skeleton blog post: it slugifies the title, \
                  stamps today's date, and writes a metadata header plus an \
                  empty body into the content directory.",
    after_help = "EXAMPLES:\n\
        \x20 mkpost \"hello world\"\n\
        \x20 mkpost \"PYTHON tips & tricks\" --dir content\n\
        \x20 mkpost \"a draft\" -d /tmp/drafts -v",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The post to create.
    #[command(flatten)]
    pub post: PostArgs,
}

// ── post arguments ────────────────────────────────────────────────────────────

/// Arguments describing the post to scaffold.
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Post title.  It is used also for the slug and the file name.
    #[arg(value_name = "TITLE", help = "Post title (also used for slug and file name)")]
    pub title: String,

    /// Content directory.  The post will be created there.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Content directory (default: configured content root)"
    )]
    pub dir: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
