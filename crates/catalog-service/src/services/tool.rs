//! Tool service
//!
//! Listing, lookup and category statistics for the catalog.

use catalog_core::ToolFilter;
use tracing::{debug, instrument};

use crate::dto::{CategoryCountResponse, ToolResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Options for listing tools
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Predicates applied to the fetched tools
    pub filter: ToolFilter,
    /// Attach README text to every listed tool
    pub include_readme: bool,
}

impl ListOptions {
    pub fn new(filter: ToolFilter) -> Self {
        Self {
            filter,
            include_readme: false,
        }
    }

    pub fn with_readme(mut self, include_readme: bool) -> Self {
        self.include_readme = include_readme;
        self
    }
}

/// Tool service
pub struct ToolService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ToolService<'a> {
    /// Create a new ToolService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List tools ordered by upvotes (desc), filtered and optionally enriched
    #[instrument(skip(self))]
    pub async fn list_tools(&self, options: ListOptions) -> ServiceResult<Vec<ToolResponse>> {
        let tools = self.ctx.tool_repo().list_all(self.ctx.page_size()).await?;
        let total = tools.len();
        let tools = options.filter.apply(tools);

        debug!(total, matched = tools.len(), "Tools listed");

        if !options.include_readme {
            return Ok(tools.into_iter().map(ToolResponse::from).collect());
        }

        let enriched = self.ctx.readme_fetcher().fetch_all(tools).await;
        Ok(enriched
            .into_iter()
            .map(|(tool, readme)| ToolResponse::from(tool).with_readme(readme))
            .collect())
    }

    /// Get one tool by its exact name
    #[instrument(skip(self))]
    pub async fn get_tool(&self, name: &str, include_readme: bool) -> ServiceResult<ToolResponse> {
        let tool = self
            .ctx
            .tool_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tool", name))?;

        let readme = if include_readme {
            self.ctx.readme_fetcher().fetch(&tool).await
        } else {
            None
        };

        Ok(ToolResponse::from(tool).with_readme(readme))
    }

    /// Number of tools per primary category, largest first
    #[instrument(skip(self))]
    pub async fn category_stats(&self) -> ServiceResult<Vec<CategoryCountResponse>> {
        let counts = self.ctx.tool_repo().count_by_category().await?;
        Ok(counts.into_iter().map(CategoryCountResponse::from).collect())
    }
}
