//! Service context - dependency container for services
//!
//! Holds the connection pool, repositories and the README fetcher.

use std::sync::Arc;

use catalog_core::traits::{ToolRepository, VoteRepository};
use catalog_db::PgPool;

use super::error::{ServiceError, ServiceResult};
use super::readme::ReadmeFetcher;

/// Default number of rows fetched per listing page
pub const DEFAULT_PAGE_SIZE: i64 = 1000;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The PostgreSQL pool (readiness checks)
/// - Tool and vote repositories
/// - The README fetcher used for enrichment
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    tool_repo: Arc<dyn ToolRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    // Enrichment
    readme_fetcher: Arc<ReadmeFetcher>,

    page_size: i64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        tool_repo: Arc<dyn ToolRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        readme_fetcher: Arc<ReadmeFetcher>,
        page_size: i64,
    ) -> Self {
        Self {
            pool,
            tool_repo,
            vote_repo,
            readme_fetcher,
            page_size: page_size.max(1),
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the tool repository
    pub fn tool_repo(&self) -> &dyn ToolRepository {
        self.tool_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    // === Enrichment ===

    /// Get the README fetcher
    pub fn readme_fetcher(&self) -> &ReadmeFetcher {
        self.readme_fetcher.as_ref()
    }

    /// Page size used when listing every tool
    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("readme_enrichment", &self.readme_fetcher.is_enabled())
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    tool_repo: Option<Arc<dyn ToolRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    readme_fetcher: Option<Arc<ReadmeFetcher>>,
    page_size: i64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            tool_repo: None,
            vote_repo: None,
            readme_fetcher: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn tool_repo(mut self, repo: Arc<dyn ToolRepository>) -> Self {
        self.tool_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn readme_fetcher(mut self, fetcher: ReadmeFetcher) -> Self {
        self.readme_fetcher = Some(Arc::new(fetcher));
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the ServiceContext
    ///
    /// Enrichment is disabled unless a fetcher was supplied.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let readme_fetcher = self
            .readme_fetcher
            .unwrap_or_else(|| Arc::new(ReadmeFetcher::disabled()));

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.tool_repo.ok_or_else(|| ServiceError::validation("tool_repo is required"))?,
            self.vote_repo.ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            readme_fetcher,
            self.page_size,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
