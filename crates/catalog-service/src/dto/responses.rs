//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Tool fields use
//! camelCase to match the catalog's JSON data format.

use catalog_core::entities::{Importance, VoteAction};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Tool Responses
// ============================================================================

/// Tool as returned by the listing and detail endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub importance: Importance,
    pub is_open_source: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub tags: Vec<String>,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// README text fetched from the source repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}

impl ToolResponse {
    /// Attach README text
    pub fn with_readme(mut self, readme: Option<String>) -> Self {
        self.readme = readme;
        self
    }
}

/// Number of tools in one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountResponse {
    pub category: String,
    pub count: i64,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Result of an upvote toggle
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub action: VoteAction,
    /// Whether the caller holds an upvote after the toggle
    pub voted: bool,
    pub upvotes: i32,
    pub message: String,
}

impl VoteResponse {
    pub fn new(action: VoteAction, voted: bool, upvotes: i32) -> Self {
        let message = match (action, voted) {
            (VoteAction::Added, _) => "Upvote added",
            (VoteAction::Removed, _) => "Upvote removed",
            (VoteAction::Unchanged, true) => "Already upvoted",
            (VoteAction::Unchanged, false) => "Upvote already removed",
        };

        Self {
            action,
            voted,
            upvotes,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Import Responses
// ============================================================================

/// Summary of a catalog import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Records found in the input
    pub received: usize,
    /// Records folded into an earlier record with the same name
    pub merged: usize,
    /// Tools written to the database
    pub imported: usize,
    /// Records rejected by validation
    pub skipped: usize,
    /// Tools removed before importing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<u64>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
