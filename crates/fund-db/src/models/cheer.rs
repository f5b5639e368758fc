//! Cheer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the cheers table
#[derive(Debug, Clone, FromRow)]
pub struct CheerModel {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub initials: String,
    pub color_from: String,
    pub color_to: String,
    pub client_ref: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
