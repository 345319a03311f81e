use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::message::{ContactMessage, CreateMessage, MessageRecord};
use crate::models::ValidationError;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("message not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

const RECORD_COLUMNS: &str = "id, \"type\", name, email, phone, message, product, category, \
                              recipient, date, \"time\", read, created_at";

/// Wraps the contact-message collection.
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All messages, newest-first, with `createdAt` exposed as `timestamp`.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, MessageError> {
        let sql = format!("SELECT {} FROM messages ORDER BY created_at DESC", RECORD_COLUMNS);
        let records = sqlx::query_as::<_, MessageRecord>(&sql).fetch_all(&self.pool).await?;

        Ok(records.into_iter().map(|r| ContactMessage::from_record(r, true)).collect())
    }

    pub async fn create(&self, payload: CreateMessage) -> Result<ContactMessage, MessageError> {
        let msg = payload.validate()?;

        let sql = format!(
            "INSERT INTO messages (\"type\", name, email, phone, message, product, category, \
             recipient, date, \"time\") \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            RECORD_COLUMNS
        );

        let record = sqlx::query_as::<_, MessageRecord>(&sql)
            .bind(&msg.kind)
            .bind(&msg.name)
            .bind(&msg.email)
            .bind(&msg.phone)
            .bind(&msg.message)
            .bind(&msg.product)
            .bind(&msg.category)
            .bind(&msg.recipient)
            .bind(&msg.date)
            .bind(&msg.time)
            .fetch_one(&self.pool)
            .await?;

        Ok(ContactMessage::from_record(record, false))
    }

    /// One-way unread -> read transition. Repeated calls keep it read.
    pub async fn mark_read(&self, id: &str) -> Result<(), MessageError> {
        let uuid = parse_id(id)?;

        let updated: Option<Uuid> =
            sqlx::query_scalar("UPDATE messages SET read = TRUE WHERE id = $1 RETURNING id")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;

        updated.map(|_| ()).ok_or_else(|| MessageError::NotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), MessageError> {
        let uuid = parse_id(id)?;

        let deleted: Option<Uuid> =
            sqlx::query_scalar("DELETE FROM messages WHERE id = $1 RETURNING id")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;

        deleted.map(|_| ()).ok_or_else(|| MessageError::NotFound(id.to_string()))
    }

    /// Empty the collection. A no-op when already empty.
    pub async fn delete_all(&self) -> Result<(), MessageError> {
        sqlx::query("DELETE FROM messages").execute(&self.pool).await?;
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<Uuid, MessageError> {
    Uuid::parse_str(id).map_err(|_| MessageError::NotFound(id.to_string()))
}
