//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod import;
pub mod readme;
pub mod tool;
pub mod vote;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use import::{ImportOptions, ImportService};
pub use readme::ReadmeFetcher;
pub use tool::{ListOptions, ToolService};
pub use vote::VoteService;
