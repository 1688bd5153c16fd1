//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in catalog-core.

mod error;
mod tool;
mod vote;

pub use error::{is_foreign_key_violation, map_db_error, tool_not_found};
pub use tool::PgToolRepository;
pub use vote::PgVoteRepository;
