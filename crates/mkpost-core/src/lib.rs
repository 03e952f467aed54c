//! mkpost Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mkpost
//! blog post scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mkpost-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Filesystem, Clock)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mkpost-adapters (Infrastructure)    │
//! │  (LocalFilesystem, SystemClock, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │    (PostDraft, Slug, DisplayTitle)      │
//! │         No I/O Dependencies             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mkpost_core::application::{Clock, Filesystem, ScaffoldService};
//! # fn demo(filesystem: Box<dyn Filesystem>, clock: Box<dyn Clock>)
//! #     -> mkpost_core::error::MkpostResult<()> {
//! // Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, clock);
//! let post = service.scaffold("hello world", "content", &[], "md")?;
//! println!("{}", post.path.display());
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, ScaffoldedPost,
        ports::{Clock, Filesystem},
    };
    pub use crate::domain::{DisplayTitle, PostDraft, Slug};
    pub use crate::error::{MkpostError, MkpostResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
