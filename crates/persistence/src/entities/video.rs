//! Video entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Video;

/// Database row mapping for the videos table.
#[derive(Debug, Clone, FromRow)]
pub struct VideoEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub url: String,
    pub file: Option<String>,
    pub thumbnail: Option<String>,
    pub description: String,
    pub description_si: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VideoEntity> for Video {
    fn from(entity: VideoEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            url: entity.url,
            file: entity.file,
            thumbnail: entity.thumbnail,
            description: entity.description,
            description_si: entity.description_si,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
