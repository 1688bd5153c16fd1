//! Domain entities - core business objects

mod importance;
mod tool;
mod vote;

pub use importance::{Importance, ParseImportanceError};
pub use tool::{CategoryCount, Tool};
pub use vote::{VoteAction, VoteOutcome};
