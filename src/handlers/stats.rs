use axum::{extract::State, response::IntoResponse, Json};

use crate::error::ApiError;
use crate::services::StatsService;
use crate::state::AppState;

/// GET /api/stats - Dashboard counters and per-category breakdown
pub async fn summary(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summary = StatsService::new(state.pool).summary().await?;
    Ok(Json(summary))
}
