//! Album and gallery image entities.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use domain::models::{Album, GalleryImage};

/// Database row mapping for the albums table.
#[derive(Debug, Clone, FromRow)]
pub struct AlbumEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub is_active: bool,
    pub position: i32,
    pub published_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AlbumEntity> for Album {
    fn from(entity: AlbumEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            slug: entity.slug,
            description: entity.description,
            description_si: entity.description_si,
            cover: entity.cover,
            is_active: entity.is_active,
            position: entity.position,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the gallery_images table.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryImageEntity {
    pub id: i64,
    pub album_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryImageEntity> for GalleryImage {
    fn from(entity: GalleryImageEntity) -> Self {
        Self {
            id: entity.id,
            album_id: entity.album_id,
            image: entity.image,
            caption: entity.caption,
            caption_si: entity.caption_si,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
