//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Tool name taken verbatim from the `:name` path segment; must be non-empty
#[derive(Debug, Clone)]
pub struct ToolPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ToolPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        if name.is_empty() {
            return Err(ApiError::invalid_path("Tool name must not be empty"));
        }

        Ok(ToolPath(name))
    }
}
