//! Integration test utilities for the tool catalog
//!
//! Helpers for running end-to-end tests against the REST API backed by a
//! live PostgreSQL database.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
