//! Tool database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tools table
#[derive(Debug, Clone, FromRow)]
pub struct ToolModel {
    pub name: String,
    pub description: String,
    pub category: String,
    pub categories: Option<Vec<String>>,
    pub importance: String,
    pub is_open_source: bool,
    pub url: String,
    pub documentation_url: Option<String>,
    pub github_url: Option<String>,
    pub tags: Vec<String>,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tools per category (from aggregate query)
#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountModel {
    pub category: String,
    pub count: i64,
}
