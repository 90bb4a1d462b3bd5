//! Publication and download category entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{DownloadCategory, Publication};

/// Database row mapping for the publications table.
#[derive(Debug, Clone, FromRow)]
pub struct PublicationEntity {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    pub file: Option<String>,
    pub external_url: String,
    pub cover: Option<String>,
    pub published_at: DateTime<Utc>,
    pub is_active: bool,
    pub department: String,
    pub department_si: String,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PublicationEntity> for Publication {
    fn from(entity: PublicationEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_si: entity.title_si,
            description: entity.description,
            description_si: entity.description_si,
            file: entity.file,
            external_url: entity.external_url,
            cover: entity.cover,
            published_at: entity.published_at,
            is_active: entity.is_active,
            department: entity.department,
            department_si: entity.department_si,
            category_id: entity.category_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the download_categories table.
#[derive(Debug, Clone, FromRow)]
pub struct DownloadCategoryEntity {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DownloadCategoryEntity> for DownloadCategory {
    fn from(entity: DownloadCategoryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_si: entity.name_si,
            description: entity.description,
            description_si: entity.description_si,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
