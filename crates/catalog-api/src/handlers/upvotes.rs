//! Upvote handlers
//!
//! Endpoints for checking and toggling the caller's upvote.

use axum::{extract::State, http::StatusCode, Json};
use catalog_service::{VoteResponse, VoteService};

use crate::extractors::{ClientIp, ToolPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Check whether the caller upvoted a tool: 200 if so, 404 otherwise
///
/// HEAD /api/tools/:name/upvote
pub async fn check_upvote(
    State(state): State<AppState>,
    ToolPath(name): ToolPath,
    ClientIp(ip): ClientIp,
) -> ApiResult<StatusCode> {
    let service = VoteService::new(state.service_context());
    let voted = service.has_upvoted(&name, &ip).await?;

    Ok(if voted {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    })
}

/// Toggle the caller's upvote
///
/// POST /api/tools/:name/upvote
pub async fn toggle_upvote(
    State(state): State<AppState>,
    ToolPath(name): ToolPath,
    ClientIp(ip): ClientIp,
) -> ApiResult<Json<VoteResponse>> {
    let service = VoteService::new(state.service_context());
    let response = service.toggle_upvote(&name, &ip).await?;
    Ok(Json(response))
}
