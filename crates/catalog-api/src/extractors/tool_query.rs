//! Query string extractors for tool endpoints
//!
//! Listing accepts comma separated `category` and `importance` lists.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use catalog_core::{Importance, ToolFilter};
use catalog_service::ListOptions;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ToolListParams {
    /// Case-insensitive substring of the tool name
    #[serde(default)]
    pub search: Option<String>,
    /// Comma separated categories, any of which may match
    #[serde(default)]
    pub category: Option<String>,
    /// Comma separated importance levels, any of which may match
    #[serde(default)]
    pub importance: Option<String>,
    /// Only open-source tools
    #[serde(default)]
    pub open_source: Option<bool>,
    /// Attach README text to every tool
    #[serde(default)]
    pub readme: Option<bool>,
}

fn comma_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl ToolListParams {
    /// Convert into listing options
    pub fn into_options(self) -> Result<ListOptions, ApiError> {
        let mut filter = ToolFilter::new().open_source_only(self.open_source.unwrap_or(false));

        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter = filter.with_search(search);
        }

        for category in comma_list(self.category.as_deref()) {
            filter = filter.with_category(category);
        }

        for level in comma_list(self.importance.as_deref()) {
            let importance = level
                .parse::<Importance>()
                .map_err(|e| ApiError::invalid_query(e.to_string()))?;
            filter = filter.with_importance(importance);
        }

        Ok(ListOptions::new(filter).with_readme(self.readme.unwrap_or(false)))
    }
}

/// Validated listing options
#[derive(Debug, Clone)]
pub struct ToolListQuery(pub ListOptions);

#[async_trait]
impl<S> FromRequestParts<S> for ToolListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ToolListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ToolListQuery(params.into_options()?))
    }
}

/// Detail query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ToolDetailParams {
    /// Attach README text (on by default)
    #[serde(default = "default_readme")]
    pub readme: bool,
}

fn default_readme() -> bool {
    true
}

impl Default for ToolDetailParams {
    fn default() -> Self {
        Self { readme: true }
    }
}

/// Detail query; a malformed `readme` flag is a 400 like any listing parameter
#[derive(Debug, Clone)]
pub struct ToolDetailQuery(pub ToolDetailParams);

#[async_trait]
impl<S> FromRequestParts<S> for ToolDetailQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ToolDetailParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ToolDetailQuery(params))
    }
}
