//! HTTP request handlers
//!
//! Each module handles a specific resource type.

pub mod categories;
pub mod health;
pub mod tools;
pub mod upvotes;
