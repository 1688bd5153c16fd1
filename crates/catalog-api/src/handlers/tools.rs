//! Tool handlers
//!
//! Endpoints for listing tools and fetching one tool.

use axum::{extract::State, Json};
use catalog_service::{ToolResponse, ToolService};

use crate::extractors::{ToolDetailQuery, ToolListQuery, ToolPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List tools ordered by upvotes
///
/// GET /api/tools
pub async fn list_tools(
    State(state): State<AppState>,
    ToolListQuery(options): ToolListQuery,
) -> ApiResult<Json<Vec<ToolResponse>>> {
    let service = ToolService::new(state.service_context());
    let tools = service.list_tools(options).await?;
    Ok(Json(tools))
}

/// Get a tool by name
///
/// GET /api/tools/:name
pub async fn get_tool(
    State(state): State<AppState>,
    ToolPath(name): ToolPath,
    ToolDetailQuery(params): ToolDetailQuery,
) -> ApiResult<Json<ToolResponse>> {
    let service = ToolService::new(state.service_context());
    let tool = service.get_tool(&name, params.readme).await?;
    Ok(Json(tool))
}
