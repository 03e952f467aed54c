//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "scaffold a new post".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldService, ScaffoldedPost};
