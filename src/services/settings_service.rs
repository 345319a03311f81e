use sqlx::PgPool;
use thiserror::Error;

use crate::models::setting;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("setting not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Tiny key-value store for admin settings.
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stored value for the key, falling back to the placeholder admin
    /// credentials when nothing is stored yet.
    pub async fn get(&self, key: &str) -> Result<String, SettingsError> {
        let stored: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(value) = stored {
            return Ok(value);
        }

        setting::default_for(key)
            .map(str::to_string)
            .ok_or_else(|| SettingsError::NotFound(key.to_string()))
    }

    /// Upsert the value for the key.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
