//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{CategoryCount, Tool, VoteOutcome};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Tool Repository
// ============================================================================

#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// Find tool by its exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tool>>;

    /// Fetch one page of tools ordered by upvotes (desc), then name
    async fn list_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Tool>>;

    /// Fetch every tool by concatenating pages of `page_size`
    ///
    /// Implementations backed by a shared store should read every page from
    /// one consistent snapshot.
    async fn list_all(&self, page_size: i64) -> RepoResult<Vec<Tool>> {
        let page_size = page_size.max(1);
        let mut tools = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.list_page(page_size, offset).await?;
            let fetched = page.len() as i64;
            tools.extend(page);

            if fetched < page_size {
                break;
            }
            offset += fetched;
        }

        Ok(tools)
    }

    /// Count tools per primary category, largest first
    async fn count_by_category(&self) -> RepoResult<Vec<CategoryCount>>;

    /// Insert tools or update their descriptive fields, keeping upvote counters
    ///
    /// All or nothing: a failure leaves the catalog as it was.
    async fn upsert_all(&self, tools: &[Tool]) -> RepoResult<u64>;

    /// Replace the whole catalog (votes included) with `tools`
    ///
    /// All or nothing; returns how many tools were removed.
    async fn replace_all(&self, tools: &[Tool]) -> RepoResult<u64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Atomically add or remove the caller's vote and adjust the tool's counter
    ///
    /// Fails with `DomainError::ToolNotFound` (and changes nothing) when the
    /// tool does not exist.
    async fn toggle(&self, tool_name: &str, ip_address: &str) -> RepoResult<VoteOutcome>;

    /// Check if the caller currently has a vote on the tool
    async fn has_voted(&self, tool_name: &str, ip_address: &str) -> RepoResult<bool>;

    /// Count vote records for a tool
    async fn count_for_tool(&self, tool_name: &str) -> RepoResult<i64>;
}
