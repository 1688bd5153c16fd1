//! Test fixtures and data generators
//!
//! Tool rows are seeded straight through the repository layer under names
//! unique to the test run so parallel tests never share a counter.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use catalog_core::{Importance, Tool, ToolRepository};
use catalog_db::{PgPool, PgToolRepository};
use serde::Deserialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Tool name that no other test in this process will use
pub fn unique_tool_name(prefix: &str) -> String {
    format!("{}-{}-{}", prefix, std::process::id(), unique_suffix())
}

/// Caller address that no other test in this process will use
pub fn unique_ip() -> String {
    let n = unique_suffix();
    format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff)
}

/// Insert a tool and return it
pub async fn seed_tool(pool: &PgPool, name: &str, category: &str) -> Result<Tool> {
    let mut tool = Tool::new(
        name.to_string(),
        format!("{} description", name),
        category.to_string(),
        format!("https://{}.example.com", name),
    );
    tool.importance = Importance::Recommended;
    tool.tags = vec!["integration".to_string()];

    PgToolRepository::new(pool.clone())
        .upsert_all(std::slice::from_ref(&tool))
        .await?;
    Ok(tool)
}

/// Tool as seen by HTTP clients
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolBody {
    pub name: String,
    pub description: String,
    pub category: String,
    pub importance: String,
    pub is_open_source: bool,
    pub url: String,
    pub tags: Vec<String>,
    pub upvotes: i32,
    pub readme: Option<String>,
}

/// Toggle result as seen by HTTP clients
#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub action: String,
    pub voted: bool,
    pub upvotes: i32,
    pub message: String,
}

/// Error envelope as seen by HTTP clients
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// `{"data": ...}` wrapper
#[derive(Debug, Deserialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    pub category: String,
    pub count: i64,
}
