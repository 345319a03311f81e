use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::portfolio::{
    CreatePortfolioItem, PortfolioItem, PortfolioRecord, UpdatePortfolioItem,
};
use crate::models::ValidationError;
use crate::services::upload_service::UploadService;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("portfolio item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

const RECORD_COLUMNS: &str = "id, title, category, image, description, details, date, created_at";

/// Wraps the portfolio collection: validation, defaults and the public
/// wire shape (store identity renamed to `id`).
pub struct PortfolioService {
    pool: PgPool,
}

impl PortfolioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All items, newest-created-first.
    pub async fn list(&self) -> Result<Vec<PortfolioItem>, PortfolioError> {
        let sql = format!(
            "SELECT {} FROM portfolio_items ORDER BY created_at DESC",
            RECORD_COLUMNS
        );
        let records = sqlx::query_as::<_, PortfolioRecord>(&sql).fetch_all(&self.pool).await?;

        Ok(records.into_iter().map(PortfolioItem::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<PortfolioItem, PortfolioError> {
        let uuid = parse_id(id)?;
        let sql = format!("SELECT {} FROM portfolio_items WHERE id = $1", RECORD_COLUMNS);

        let record = sqlx::query_as::<_, PortfolioRecord>(&sql)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;

        Ok(record.into())
    }

    pub async fn create(&self, payload: CreatePortfolioItem) -> Result<PortfolioItem, PortfolioError> {
        let item = payload.validate()?;

        let sql = format!(
            "INSERT INTO portfolio_items (title, category, image, description, details, date) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            RECORD_COLUMNS
        );

        let record = sqlx::query_as::<_, PortfolioRecord>(&sql)
            .bind(&item.title)
            .bind(item.category.as_str())
            .bind(&item.image)
            .bind(&item.description)
            .bind(&item.details)
            .bind(&item.date)
            .fetch_one(&self.pool)
            .await?;

        Ok(record.into())
    }

    /// Partial update of the mutable fields. `date` and `created_at` are
    /// immutable after creation.
    pub async fn update(
        &self,
        id: &str,
        payload: UpdatePortfolioItem,
    ) -> Result<PortfolioItem, PortfolioError> {
        payload.validate()?;
        let uuid = parse_id(id)?;

        let sql = format!(
            "UPDATE portfolio_items SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                image = COALESCE($4, image), \
                description = COALESCE($5, description), \
                details = COALESCE($6, details) \
             WHERE id = $1 RETURNING {}",
            RECORD_COLUMNS
        );

        let record = sqlx::query_as::<_, PortfolioRecord>(&sql)
            .bind(uuid)
            .bind(payload.title.as_deref())
            .bind(payload.category.as_deref())
            .bind(payload.image.as_deref())
            .bind(payload.description.as_deref())
            .bind(payload.details.as_deref())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;

        Ok(record.into())
    }

    /// Remove the record; if its image was hosted under the local uploads
    /// path, unlink the file as well. The unlink is best-effort and never
    /// fails the delete.
    pub async fn delete(&self, id: &str) -> Result<(), PortfolioError> {
        let uuid = parse_id(id)?;

        let image: Option<String> =
            sqlx::query_scalar("DELETE FROM portfolio_items WHERE id = $1 RETURNING image")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;

        let image = image.ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
        UploadService::remove_local_image(&image).await;

        Ok(())
    }
}

/// Ids are store-generated UUIDs; anything that does not parse cannot
/// reference a record, so it reads as Not-Found rather than a server error.
fn parse_id(id: &str) -> Result<Uuid, PortfolioError> {
    Uuid::parse_str(id).map_err(|_| PortfolioError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_reads_as_not_found() {
        assert!(matches!(parse_id("not-a-uuid"), Err(PortfolioError::NotFound(_))));
        assert!(parse_id("1b4e28ba-2fa1-11d2-883f-0016d3cca427").is_ok());
    }
}
