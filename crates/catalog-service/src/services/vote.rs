//! Vote service
//!
//! Toggles a caller's upvote on a tool and reports vote state.

use tracing::{info, instrument};

use crate::dto::VoteResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add the caller's upvote if absent, remove it otherwise
    #[instrument(skip(self))]
    pub async fn toggle_upvote(&self, tool_name: &str, ip_address: &str) -> ServiceResult<VoteResponse> {
        let tool_name = Self::tool_name(tool_name)?;

        let outcome = self.ctx.vote_repo().toggle(tool_name, ip_address).await?;

        info!(
            tool = %tool_name,
            action = %outcome.action,
            upvotes = outcome.upvotes,
            "Upvote toggled"
        );

        Ok(VoteResponse::from(outcome))
    }

    /// Check whether the caller currently upvotes the tool
    #[instrument(skip(self))]
    pub async fn has_upvoted(&self, tool_name: &str, ip_address: &str) -> ServiceResult<bool> {
        let tool_name = Self::tool_name(tool_name)?;
        Ok(self.ctx.vote_repo().has_voted(tool_name, ip_address).await?)
    }

    fn tool_name(name: &str) -> ServiceResult<&str> {
        if name.is_empty() {
            return Err(ServiceError::validation("Tool name must not be empty"));
        }
        Ok(name)
    }
}
