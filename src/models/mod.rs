use chrono::Utc;
use thiserror::Error;

pub mod message;
pub mod portfolio;
pub mod setting;

/// Validation failure for a create/update payload. Messages are client-facing
/// and localized, matching the rest of the API surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("الحقل {0} مطلوب")]
    MissingField(&'static str),

    #[error("التصنيف غير صالح: {0}")]
    UnknownCategory(String),
}

/// Current date rendered as the stored display string.
pub fn current_date_string() -> String {
    Utc::now().format("%d/%m/%Y").to_string()
}

/// Current time rendered as the stored display string.
pub fn current_time_string() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}

/// Extract a required, non-empty string field from an optional payload value.
pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert_eq!(required(None, "title"), Err(ValidationError::MissingField("title")));
        assert_eq!(required(Some("   ".into()), "title"), Err(ValidationError::MissingField("title")));
        assert_eq!(required(Some("x".into()), "title"), Ok("x".to_string()));
    }

    #[test]
    fn date_and_time_strings_are_non_empty() {
        assert!(!current_date_string().is_empty());
        assert!(!current_time_string().is_empty());
    }
}
