use axum::{extract::Multipart, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::services::{UploadError, UploadService};

/// POST /api/upload - Accept a single image in the `image` multipart field
pub async fn upload(mut multipart: Multipart) -> Result<impl IntoResponse, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("لم يتم رفع أي صورة"))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::validation("حجم الملف يتجاوز الحد الأقصى المسموح به"))?;

        let stored = UploadService::new()
            .store(&original_name, content_type.as_deref(), &data)
            .await?;

        return Ok(Json(json!({
            "message": "تم رفع الصورة بنجاح",
            "url": stored.url,
            "filename": stored.filename
        })));
    }

    Err(UploadError::NoFile.into())
}
