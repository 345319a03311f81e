// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::{MessageError, PortfolioError, SettingsError, StatsError, UploadError};

/// HTTP API error with appropriate status codes and client-facing Arabic
/// messages. Everything a handler can fail with collapses into one of three
/// shapes: 400 validation, 404 not-found, 500 internal.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Generic 500; the real cause must already have been logged.
    pub fn internal() -> Self {
        ApiError::Internal("حدث خطأ في الخادم".to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(json!({ "error": self.message() }))).into_response()
    }
}

// Convert service error types to ApiError. The not-found and validation
// messages are the localized strings the frontend expects; internal causes
// are logged server-side only.
impl From<PortfolioError> for ApiError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::NotFound(_) => ApiError::not_found("المنتج غير موجود"),
            PortfolioError::Validation(e) => ApiError::validation(e.to_string()),
            PortfolioError::Database(e) => {
                tracing::error!("portfolio database error: {}", e);
                ApiError::internal()
            }
        }
    }
}

impl From<MessageError> for ApiError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::NotFound(_) => ApiError::not_found("الرسالة غير موجودة"),
            MessageError::Validation(e) => ApiError::validation(e.to_string()),
            MessageError::Database(e) => {
                tracing::error!("message database error: {}", e);
                ApiError::internal()
            }
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::NotFound(_) => ApiError::not_found("الإعداد غير موجود"),
            SettingsError::Database(e) => {
                tracing::error!("settings database error: {}", e);
                ApiError::internal()
            }
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Database(e) => {
                tracing::error!("stats database error: {}", e);
                ApiError::internal()
            }
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NoFile => ApiError::validation("لم يتم رفع أي صورة"),
            UploadError::UnsupportedType(_) => ApiError::validation("يُسمح برفع ملفات الصور فقط"),
            UploadError::TooLarge(_) => {
                ApiError::validation("حجم الملف يتجاوز الحد الأقصى المسموح به")
            }
            UploadError::Io(e) => {
                tracing::error!("upload io error: {}", e);
                ApiError::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn maps_service_errors_to_status_codes() {
        let err: ApiError = PortfolioError::NotFound("x".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError =
            PortfolioError::Validation(ValidationError::MissingField("title")).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: ApiError = UploadError::NoFile.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "لم يتم رفع أي صورة");

        let err: ApiError = UploadError::TooLarge(usize::MAX).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_stay_generic() {
        let err = ApiError::internal();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "حدث خطأ في الخادم");
    }
}
