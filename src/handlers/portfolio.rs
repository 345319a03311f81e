use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use crate::services::PortfolioService;
use crate::state::AppState;

/// GET /api/portfolio - All items, newest first
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = PortfolioService::new(state.pool).list().await?;
    Ok(Json(items))
}

/// GET /api/portfolio/:id - One item, 404 on miss
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let item = PortfolioService::new(state.pool).get(&id).await?;
    Ok(Json(item))
}

/// POST /api/portfolio - Create an item
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreatePortfolioItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = PortfolioService::new(state.pool).create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/portfolio/:id - Partial update of the mutable fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePortfolioItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = PortfolioService::new(state.pool).update(&id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/portfolio/:id - Delete an item (and its local image, best-effort)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    PortfolioService::new(state.pool).delete(&id).await?;
    Ok(Json(json!({ "message": "تم حذف المنتج بنجاح", "id": id })))
}
