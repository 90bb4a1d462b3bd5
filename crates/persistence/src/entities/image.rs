//! Attached image entity shared by `news_images` and `notice_images`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::AttachedImage;

/// Row mapping for gallery image tables. Queries alias the owning foreign key
/// column (`news_id`, `notice_id`) to `parent_id`.
#[derive(Debug, Clone, FromRow)]
pub struct AttachedImageEntity {
    pub id: i64,
    pub parent_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AttachedImageEntity> for AttachedImage {
    fn from(entity: AttachedImageEntity) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            image: entity.image,
            caption: entity.caption,
            caption_si: entity.caption_si,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
