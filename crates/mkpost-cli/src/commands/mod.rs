//! Command handlers.

pub mod new_post;
