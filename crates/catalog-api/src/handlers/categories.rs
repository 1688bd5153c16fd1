//! Category handlers

use axum::{extract::State, Json};
use catalog_service::{ApiResponse, CategoryCountResponse, ToolService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Number of tools per category, largest first
///
/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<CategoryCountResponse>>>> {
    let service = ToolService::new(state.service_context());
    let stats = service.category_stats().await?;
    Ok(Json(ApiResponse::new(stats)))
}
