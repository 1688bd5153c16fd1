//! Database models
//!
//! These structs map directly to database tables using SQLx FromRow.

mod tool;

pub use tool::{CategoryCountModel, ToolModel};
