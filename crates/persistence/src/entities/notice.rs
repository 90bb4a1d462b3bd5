//! Notice entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Notice;

/// Database row mapping for the notices table.
#[derive(Debug, Clone, FromRow)]
pub struct NoticeEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub content: String,
    pub content_si: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoticeEntity> for Notice {
    fn from(entity: NoticeEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            content: entity.content,
            content_si: entity.content_si,
            image: entity.image,
            published_at: entity.published_at,
            expires_at: entity.expires_at,
            priority: entity.priority,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
