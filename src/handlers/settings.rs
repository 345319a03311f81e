use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::services::SettingsService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SettingBody {
    pub value: String,
}

/// GET /api/settings/:key - Stored value, with fallbacks for admin credentials
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let value = SettingsService::new(state.pool).get(&key).await?;
    Ok(Json(json!({ "value": value })))
}

/// PUT /api/settings/:key - Upsert the value for a key
pub async fn set(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<SettingBody>,
) -> Result<impl IntoResponse, ApiError> {
    SettingsService::new(state.pool).set(&key, &body.value).await?;
    Ok(Json(json!({ "message": "تم تحديث الإعداد بنجاح", "key": key })))
}
