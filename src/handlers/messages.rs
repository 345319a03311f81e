use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::models::message::CreateMessage;
use crate::services::MessageService;
use crate::state::AppState;

/// GET /api/messages - All messages, newest first
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let messages = MessageService::new(state.pool).list().await?;
    Ok(Json(messages))
}

/// POST /api/messages - Store a visitor submission
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessage>,
) -> Result<impl IntoResponse, ApiError> {
    let message = MessageService::new(state.pool).create(payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// PATCH /api/messages/:id/read - Flip unread -> read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    MessageService::new(state.pool).mark_read(&id).await?;
    Ok(Json(json!({ "message": "تم تحديث حالة القراءة", "id": id })))
}

/// DELETE /api/messages/:id - Delete one message
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    MessageService::new(state.pool).delete(&id).await?;
    Ok(Json(json!({ "message": "تم حذف الرسالة بنجاح", "id": id })))
}

/// DELETE /api/messages - Empty the collection
pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    MessageService::new(state.pool).delete_all().await?;
    Ok(Json(json!({ "message": "تم حذف جميع الرسائل بنجاح" })))
}
