//! Entity <-> Model mappers
//!
//! Conversions between domain entities (catalog-core) and database models.

mod tool;

pub use tool::ToolUpsert;
