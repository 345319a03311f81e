use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{current_date_string, current_time_string, required, ValidationError};

/// Row shape as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct MessageRecord {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product: String,
    pub category: String,
    pub recipient: String,
    pub date: String,
    pub time: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Public wire shape. The creation timestamp is exposed as `timestamp` on
/// listings only; the create response omits it.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product: String,
    pub category: String,
    pub recipient: String,
    pub date: String,
    pub time: String,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ContactMessage {
    pub fn from_record(record: MessageRecord, with_timestamp: bool) -> Self {
        Self {
            id: record.id.to_string(),
            kind: record.kind,
            name: record.name,
            email: record.email,
            phone: record.phone,
            message: record.message,
            product: record.product,
            category: record.category,
            recipient: record.recipient,
            date: record.date,
            time: record.time,
            read: record.read,
            timestamp: with_timestamp.then_some(record.created_at),
        }
    }
}

/// Incoming visitor submission. The original accepted an arbitrary body;
/// here the fields are explicit, with the store-required ones validated.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessage {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
    pub recipient: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Validated submission with defaults applied.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product: String,
    pub category: String,
    pub recipient: String,
    pub date: String,
    pub time: String,
}

impl CreateMessage {
    pub fn validate(self) -> Result<NewMessage, ValidationError> {
        Ok(NewMessage {
            kind: required(self.kind, "type")?,
            name: required(self.name, "name")?,
            email: self.email.unwrap_or_default(),
            phone: required(self.phone, "phone")?,
            message: required(self.message, "message")?,
            product: self.product.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            recipient: self.recipient.unwrap_or_default(),
            date: self.date.filter(|d| !d.is_empty()).unwrap_or_else(current_date_string),
            time: self.time.filter(|t| !t.is_empty()).unwrap_or_else(current_time_string),
        })
    }
}
