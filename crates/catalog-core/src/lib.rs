//! # catalog-core
//!
//! Domain layer containing entities, filters, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod filter;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{CategoryCount, Importance, Tool, VoteAction, VoteOutcome};
pub use error::DomainError;
pub use filter::ToolFilter;
pub use traits::{RepoResult, ToolRepository, VoteRepository};
