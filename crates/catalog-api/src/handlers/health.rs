//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use catalog_service::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Upper bound on the readiness database probe
const READINESS_TIMEOUT: Duration = Duration::from_secs(3);

/// Basic health check (liveness probe)
///
/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /api/health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let acquire = state.service_context().pool().acquire();
    let db_healthy = match tokio::time::timeout(READINESS_TIMEOUT, acquire).await {
        Ok(Ok(_conn)) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "Database not ready");
            false
        }
        Err(_) => {
            warn!("Database readiness probe timed out");
            false
        }
    };

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
