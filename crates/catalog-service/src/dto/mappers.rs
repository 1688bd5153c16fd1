//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use catalog_core::entities::{CategoryCount, Tool, VoteOutcome};

use super::responses::{CategoryCountResponse, ToolResponse, VoteResponse};

impl From<Tool> for ToolResponse {
    fn from(tool: Tool) -> Self {
        Self {
            name: tool.name,
            description: tool.description,
            category: tool.category,
            categories: tool.categories,
            importance: tool.importance,
            is_open_source: tool.is_open_source,
            url: tool.url,
            documentation_url: tool.documentation_url,
            github_url: tool.github_url,
            tags: tool.tags,
            upvotes: tool.upvotes,
            created_at: tool.created_at,
            updated_at: tool.updated_at,
            readme: None,
        }
    }
}

impl From<&Tool> for ToolResponse {
    fn from(tool: &Tool) -> Self {
        Self::from(tool.clone())
    }
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(count: CategoryCount) -> Self {
        Self {
            category: count.category,
            count: count.count,
        }
    }
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        Self::new(outcome.action, outcome.voted, outcome.upvotes)
    }
}
